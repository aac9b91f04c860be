use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use fleet_core::data::{
    cost_breakdown::CostBreakdown, delivery_performance::DeliveryPerformance, order::Order,
    route::Route,
};
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

#[derive(Serialize)]
pub struct OrderDetails {
    order: Order,
    route: Option<Route>,
    cost: Option<CostBreakdown>,
    delivery: Option<DeliveryPerformance>,
}

pub async fn orders_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Order>> {
    Json(state.dataset.orders.clone())
}

pub async fn order_handler(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderDetails>, ApiError> {
    let dataset = &state.dataset;
    let order = dataset
        .order(&order_id)
        .ok_or_else(|| ApiError::NotFound(format!("Order {order_id} not found")))?;

    Ok(Json(OrderDetails {
        order: order.clone(),
        route: dataset.route_for_order(&order_id).cloned(),
        cost: dataset.cost_breakdown.for_order(&order_id).cloned(),
        delivery: dataset
            .delivery_performance
            .iter()
            .find(|delivery| delivery.order_id == order_id)
            .cloned(),
    }))
}
