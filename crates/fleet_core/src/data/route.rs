use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Route {
    #[serde(alias = "Order_ID")]
    pub order_id: String,
    #[serde(alias = "Route", default)]
    pub route: String,
    #[serde(alias = "Distance_KM")]
    pub distance_km: f64,
    #[serde(alias = "Fuel_Consumption_L", default)]
    pub fuel_consumption_l: Option<f64>,
    #[serde(alias = "Toll_Charges_INR", default)]
    pub toll_charges_inr: Option<f64>,
    #[serde(alias = "Traffic_Delay_Minutes", default)]
    pub traffic_delay_minutes: Option<f64>,
    #[serde(alias = "Weather_Impact", default)]
    pub weather_impact: Option<String>,
}
