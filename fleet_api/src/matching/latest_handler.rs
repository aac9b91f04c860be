use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap};
use fleet_core::matching::vehicle_match::MatchOutcome;

use crate::{
    error::ApiError,
    sessions::{SESSION_HEADER, session_id_from_headers},
    state::AppState,
};

pub async fn latest_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Arc<MatchOutcome>>, ApiError> {
    let session_id = session_id_from_headers(&headers)?
        .ok_or_else(|| ApiError::BadRequest(format!("Missing {SESSION_HEADER} header")))?;

    state
        .sessions
        .latest(&session_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(String::from("No matching results for this session")))
}
