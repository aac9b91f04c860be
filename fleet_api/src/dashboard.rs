use std::sync::Arc;

use axum::{Json, extract::State};
use fleet_core::views::dashboard::{DashboardView, dashboard_view};

use crate::state::AppState;

pub async fn dashboard_handler(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(dashboard_view(&state.dataset))
}
