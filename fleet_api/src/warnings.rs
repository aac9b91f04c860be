use std::sync::Arc;

use axum::{Json, extract::State};
use fleet_core::data::dataset::LoadWarning;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct WarningsResponse {
    load: Vec<LoadWarning>,
    artifacts: Option<String>,
}

pub async fn warnings_handler(State(state): State<Arc<AppState>>) -> Json<WarningsResponse> {
    Json(WarningsResponse {
        load: state.dataset.warnings.clone(),
        artifacts: state.artifacts.warning().map(str::to_owned),
    })
}
