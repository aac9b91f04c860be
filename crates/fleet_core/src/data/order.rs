use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::csv_number::empty_as_nan;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Order {
    #[serde(alias = "Order_ID")]
    pub order_id: String,
    #[serde(alias = "Priority")]
    pub priority: Priority,
    #[serde(alias = "Product_Category", default)]
    pub product_category: String,
    #[serde(alias = "Origin")]
    pub origin: String,
    #[serde(alias = "Destination", default)]
    pub destination: String,
    #[serde(alias = "Special_Handling", default)]
    pub special_handling: SpecialHandling,
    #[serde(alias = "Order_Value_INR", deserialize_with = "empty_as_nan")]
    pub order_value_inr: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Express,
    Standard,
    Economy,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Express => "Express",
            Priority::Standard => "Standard",
            Priority::Economy => "Economy",
            Priority::Other(value) => value,
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "express" => Priority::Express,
            "standard" => Priority::Standard,
            "economy" => Priority::Economy,
            _ => Priority::Other(value.trim().to_owned()),
        }
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum SpecialHandling {
    #[default]
    None,
    TemperatureControlled,
    Fragile,
    Hazmat,
    Other(String),
}

impl SpecialHandling {
    pub fn as_str(&self) -> &str {
        match self {
            SpecialHandling::None => "None",
            SpecialHandling::TemperatureControlled => "Temperature_Controlled",
            SpecialHandling::Fragile => "Fragile",
            SpecialHandling::Hazmat => "Hazmat",
            SpecialHandling::Other(value) => value,
        }
    }
}

impl From<String> for SpecialHandling {
    fn from(value: String) -> Self {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "" | "none" => SpecialHandling::None,
            "temperature_controlled" => SpecialHandling::TemperatureControlled,
            "fragile" => SpecialHandling::Fragile,
            "hazmat" => SpecialHandling::Hazmat,
            _ => SpecialHandling::Other(value.trim().to_owned()),
        }
    }
}

impl From<SpecialHandling> for String {
    fn from(value: SpecialHandling) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for SpecialHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
