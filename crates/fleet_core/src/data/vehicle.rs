use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::csv_number::empty_as_nan;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Vehicle {
    #[serde(alias = "Vehicle_ID")]
    pub vehicle_id: String,
    #[serde(alias = "Vehicle_Type")]
    pub vehicle_type: String,
    #[serde(alias = "Status")]
    pub status: VehicleStatus,
    #[serde(alias = "Capacity_KG", deserialize_with = "empty_as_nan")]
    pub capacity_kg: f64,
    #[serde(alias = "Fuel_Efficiency_KM_per_L", deserialize_with = "empty_as_nan")]
    pub fuel_efficiency_km_per_l: f64,
    #[serde(alias = "CO2_Emissions_Kg_per_KM", deserialize_with = "empty_as_nan")]
    pub co2_emissions_kg_per_km: f64,
    #[serde(alias = "Age_Years", default, deserialize_with = "empty_as_nan")]
    pub age_years: f64,
    #[serde(alias = "Current_Location")]
    pub current_location: String,
}

impl Vehicle {
    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum VehicleStatus {
    Available,
    InTransit,
    Maintenance,
    Other(String),
}

impl VehicleStatus {
    pub fn as_str(&self) -> &str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::InTransit => "In_Transit",
            VehicleStatus::Maintenance => "Maintenance",
            VehicleStatus::Other(value) => value,
        }
    }
}

impl From<String> for VehicleStatus {
    fn from(value: String) -> Self {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "available" => VehicleStatus::Available,
            "in_transit" | "busy" => VehicleStatus::InTransit,
            "maintenance" => VehicleStatus::Maintenance,
            _ => VehicleStatus::Other(value.trim().to_owned()),
        }
    }
}

impl From<&str> for VehicleStatus {
    fn from(value: &str) -> Self {
        VehicleStatus::from(value.to_owned())
    }
}

impl From<VehicleStatus> for String {
    fn from(value: VehicleStatus) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_case_insensitive() {
        assert_eq!(VehicleStatus::from("available"), VehicleStatus::Available);
        assert_eq!(VehicleStatus::from("AVAILABLE"), VehicleStatus::Available);
        assert_eq!(VehicleStatus::from("In Transit"), VehicleStatus::InTransit);
        assert_eq!(VehicleStatus::from("busy"), VehicleStatus::InTransit);
        assert_eq!(
            VehicleStatus::from("Retired"),
            VehicleStatus::Other(String::from("Retired"))
        );
    }
}
