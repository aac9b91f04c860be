use std::sync::Arc;

use axum::{Json, extract::State};
use fleet_core::views::performance::{PerformanceView, performance_view};

use crate::state::AppState;

pub async fn performance_handler(State(state): State<Arc<AppState>>) -> Json<PerformanceView> {
    Json(performance_view(&state.dataset))
}
