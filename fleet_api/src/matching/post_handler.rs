use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
};
use fleet_core::matching::{matcher::Matcher, vehicle_match::MatchOutcome};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{
    error::ApiError,
    sessions::{SESSION_HEADER, session_id_from_headers},
    state::AppState,
};

#[derive(Deserialize)]
pub struct MatchRequest {
    order_id: String,
    min_score: Option<f64>,
}

#[derive(Serialize)]
pub struct MatchResponse {
    session_id: Uuid,
    outcome: Arc<MatchOutcome>,
}

impl IntoResponse for MatchResponse {
    fn into_response(self) -> Response {
        let mut response = Json(&self).into_response();
        if let Ok(value) = HeaderValue::from_str(&self.session_id.to_string()) {
            response.headers_mut().insert(SESSION_HEADER, value);
        }
        response
    }
}

pub async fn post_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<MatchRequest>,
) -> Result<MatchResponse, ApiError> {
    let session_id = session_id_from_headers(&headers)?.unwrap_or_else(Uuid::new_v4);
    let order_id = body.order_id.trim();
    if order_id.is_empty() {
        return Err(ApiError::BadRequest(String::from("order_id is required")));
    }

    let min_score = body.min_score.unwrap_or(state.params.default_min_score);
    let outcome = Matcher::new(&state.dataset, &state.artifacts, &state.params)
        .find_vehicle_matches(order_id, min_score);

    let matches = outcome.len();
    let outcome = state.sessions.store(session_id, outcome).await;

    let sessions = state.sessions.len().await;
    info!(
        %session_id,
        order_id,
        matches,
        sessions,
        "Vehicle matching completed"
    );

    Ok(MatchResponse {
        session_id,
        outcome,
    })
}
