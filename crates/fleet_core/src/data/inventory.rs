use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct InventoryItem {
    #[serde(alias = "Warehouse_ID")]
    pub warehouse_id: String,
    #[serde(alias = "Location", default)]
    pub location: String,
    #[serde(alias = "Product_Category")]
    pub product_category: String,
    #[serde(alias = "Current_Stock_Units")]
    pub current_stock_units: f64,
    #[serde(alias = "Reorder_Level")]
    pub reorder_level: f64,
    #[serde(alias = "Storage_Cost_per_Unit", default)]
    pub storage_cost_per_unit: Option<f64>,
}

impl InventoryItem {
    pub fn needs_reorder(&self) -> bool {
        self.current_stock_units <= self.reorder_level
    }
}
