use serde::{Deserialize, Serialize};

/// Historical delivery record. Not linked 1:1 to the live order table.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DeliveryPerformance {
    #[serde(alias = "Order_ID", default)]
    pub order_id: String,
    #[serde(alias = "Carrier")]
    pub carrier: String,
    #[serde(alias = "Promised_Delivery_Days")]
    pub promised_delivery_days: f64,
    #[serde(alias = "Actual_Delivery_Days")]
    pub actual_delivery_days: f64,
    #[serde(alias = "Delivery_Status", default)]
    pub delivery_status: String,
    #[serde(alias = "Quality_Issue", default)]
    pub quality_issue: Option<String>,
    #[serde(alias = "Customer_Rating", default)]
    pub customer_rating: Option<f64>,
    #[serde(alias = "Delivery_Cost_INR", default)]
    pub delivery_cost_inr: Option<f64>,
}

impl DeliveryPerformance {
    pub fn delay_days(&self) -> f64 {
        self.actual_delivery_days - self.promised_delivery_days
    }

    pub fn is_on_time(&self) -> bool {
        self.actual_delivery_days <= self.promised_delivery_days
    }
}
