pub mod cost_breakdown;
mod csv_number;
pub mod dataset;
pub mod delivery_performance;
pub mod feedback;
pub mod inventory;
pub mod order;
pub mod route;
pub mod vehicle;
