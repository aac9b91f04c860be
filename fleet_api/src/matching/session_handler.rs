use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct SessionPath {
    pub session_id: Uuid,
}

pub async fn delete_session_handler(
    State(state): State<Arc<AppState>>,
    Path(path): Path<SessionPath>,
) -> StatusCode {
    let cleared = state.sessions.clear(&path.session_id).await;
    debug!(session_id = %path.session_id, cleared, "Session cleared");

    StatusCode::NO_CONTENT
}
