use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, Method},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    dashboard::dashboard_handler,
    fleet::fleet_handler,
    index::index_handler,
    matching::routes::matching_routes,
    orders::{order_handler, orders_handler},
    performance::performance_handler,
    sessions::SESSION_HEADER,
    state::AppState,
    warnings::warnings_handler,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_origin(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(SESSION_HEADER)]);

    let api = Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/orders", get(orders_handler))
        .route("/orders/{order_id}", get(order_handler))
        .route("/fleet", get(fleet_handler))
        .route("/performance", get(performance_handler))
        .route("/warnings", get(warnings_handler))
        .merge(matching_routes());

    Router::new()
        .route("/", get(index_handler))
        .nest("/api", api)
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}
