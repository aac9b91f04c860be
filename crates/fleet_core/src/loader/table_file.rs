#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableFile {
    Orders,
    Routes,
    Vehicles,
    DeliveryPerformance,
    CostBreakdown,
    CustomerFeedback,
    WarehouseInventory,
}

impl TableFile {
    pub fn file_name(&self) -> &'static str {
        match self {
            TableFile::Orders => "orders.csv",
            TableFile::Routes => "routes_distance.csv",
            TableFile::Vehicles => "vehicle_fleet.csv",
            TableFile::DeliveryPerformance => "delivery_performance.csv",
            TableFile::CostBreakdown => "cost_breakdown.csv",
            TableFile::CustomerFeedback => "customer_feedback.csv",
            TableFile::WarehouseInventory => "warehouse_inventory.csv",
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            TableFile::Orders => "orders",
            TableFile::Routes => "routes",
            TableFile::Vehicles => "vehicles",
            TableFile::DeliveryPerformance => "delivery_performance",
            TableFile::CostBreakdown => "cost_breakdown",
            TableFile::CustomerFeedback => "customer_feedback",
            TableFile::WarehouseInventory => "warehouse_inventory",
        }
    }

    /// Optional tables do not raise a warning when their file is absent.
    pub fn is_optional(&self) -> bool {
        matches!(self, TableFile::WarehouseInventory)
    }
}
