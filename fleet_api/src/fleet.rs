use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use fleet_core::{
    data::vehicle::VehicleStatus,
    views::fleet_overview::{FleetFilter, FleetOverview, fleet_overview},
};
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize, Default)]
pub struct FleetQuery {
    types: Option<String>,
    statuses: Option<String>,
    min_efficiency: Option<f64>,
}

fn split_list(value: Option<&str>) -> Vec<&str> {
    value
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

impl FleetQuery {
    fn into_filter(self) -> Result<FleetFilter, ApiError> {
        if self.min_efficiency.is_some_and(|value| !value.is_finite()) {
            return Err(ApiError::BadRequest(String::from(
                "min_efficiency must be a finite number",
            )));
        }

        Ok(FleetFilter {
            vehicle_types: split_list(self.types.as_deref())
                .into_iter()
                .map(str::to_owned)
                .collect(),
            statuses: split_list(self.statuses.as_deref())
                .into_iter()
                .map(VehicleStatus::from)
                .collect(),
            min_fuel_efficiency: self.min_efficiency,
        })
    }
}

pub async fn fleet_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FleetQuery>,
) -> Result<Json<FleetOverview>, ApiError> {
    let filter = query.into_filter()?;

    Ok(Json(fleet_overview(&state.dataset.vehicles, &filter)))
}
