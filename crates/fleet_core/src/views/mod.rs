pub mod chart;
pub mod dashboard;
pub mod fleet_overview;
pub mod performance;
