use serde::Serialize;

use crate::data::{
    cost_breakdown::CostBreakdownTable, delivery_performance::DeliveryPerformance,
    feedback::Feedback, inventory::InventoryItem, order::Order, route::Route, vehicle::Vehicle,
};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub table: String,
    pub message: String,
}

impl LoadWarning {
    pub fn new(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            message: message.into(),
        }
    }
}

/// All tables of a session, loaded once and read many times.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub orders: Vec<Order>,
    pub vehicles: Vec<Vehicle>,
    pub routes: Vec<Route>,
    pub delivery_performance: Vec<DeliveryPerformance>,
    pub cost_breakdown: CostBreakdownTable,
    pub feedback: Vec<Feedback>,
    pub inventory: Vec<InventoryItem>,
    pub warnings: Vec<LoadWarning>,
}

impl Dataset {
    pub fn order(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.order_id == order_id)
    }

    pub fn route_for_order(&self, order_id: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.order_id == order_id)
    }

    pub fn vehicle(&self, vehicle_id: &str) -> Option<&Vehicle> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.vehicle_id == vehicle_id)
    }

    pub fn available_vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter().filter(|vehicle| vehicle.is_available())
    }
}
