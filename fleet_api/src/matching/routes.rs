use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{
    matching::{
        latest_handler::latest_handler, post_handler::post_handler,
        session_handler::delete_session_handler,
    },
    state::AppState,
};

pub fn matching_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/matching", post(post_handler))
        .route("/matching/latest", get(latest_handler))
        .route("/sessions/{session_id}", delete(delete_session_handler))
}
