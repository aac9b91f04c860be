use std::{io::Read, path::Path};

use serde::de::DeserializeOwned;

use crate::loader::load_error::LoadError;

pub(crate) fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All).has_headers(true);
    builder
}

/// Deserializes every row of a headed CSV stream. A single malformed row fails the whole table.
pub fn parse_table<T, R>(table: &str, reader: R) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    R: Read,
{
    reader_builder()
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|error| LoadError::csv(table, error))
}

pub fn read_table<T, P>(table: &str, path: P) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let reader = reader_builder()
        .from_path(path)
        .map_err(|error| LoadError::csv(table, error))?;

    reader
        .into_deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|error| LoadError::csv(table, error))
}

#[cfg(test)]
mod tests {
    use crate::data::{
        order::{Order, Priority, SpecialHandling},
        vehicle::{Vehicle, VehicleStatus},
    };

    use super::*;

    #[test]
    fn test_parse_orders_with_extra_columns() {
        let content = "\
Order_ID,Order_Date,Customer_Segment,Priority,Product_Category,Order_Value_INR,Origin,Destination,Special_Handling
ORD001,2024-09-01,Enterprise,Express,Electronics,1500.50,Mumbai,Delhi,None
ORD002,2024-09-02,SMB,Economy,Food,800,Pune,Chennai,
";
        let orders: Vec<Order> = parse_table("orders", content.as_bytes()).unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_id, "ORD001");
        assert_eq!(orders[0].priority, Priority::Express);
        assert_eq!(orders[0].order_value_inr, 1500.5);
        assert_eq!(orders[1].special_handling, SpecialHandling::None);
    }

    #[test]
    fn test_parse_vehicles() {
        let content = "\
Vehicle_ID,Vehicle_Type,Capacity_KG,Fuel_Efficiency_KM_per_L,Current_Location,Status,Age_Years,CO2_Emissions_Kg_per_KM
VEH001,Small_Van,800,15.2,Mumbai,Available,2.5,0.18
VEH002,Large_Truck,10000,5.1,Delhi,In_Transit,7,0.62
";
        let vehicles: Vec<Vehicle> = parse_table("vehicles", content.as_bytes()).unwrap();

        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].status, VehicleStatus::Available);
        assert_eq!(vehicles[1].status, VehicleStatus::InTransit);
        assert_eq!(vehicles[1].capacity_kg, 10_000.0);
    }

    #[test]
    fn test_blank_numeric_cells_keep_the_row() {
        let content = "\
Vehicle_ID,Vehicle_Type,Capacity_KG,Fuel_Efficiency_KM_per_L,Current_Location,Status,Age_Years,CO2_Emissions_Kg_per_KM
VEH001,Small_Van,800,15.2,Mumbai,Available,2.5,0.18
VEH002,Large_Truck,10000,,Delhi,Available,,
";
        let vehicles: Vec<Vehicle> = parse_table("vehicles", content.as_bytes()).unwrap();

        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].age_years, 2.5);
        assert_eq!(vehicles[1].capacity_kg, 10_000.0);
        assert!(vehicles[1].age_years.is_nan());
        assert!(vehicles[1].fuel_efficiency_km_per_l.is_nan());
        assert!(vehicles[1].co2_emissions_kg_per_km.is_nan());

        let content = "\
Order_ID,Priority,Product_Category,Order_Value_INR,Origin,Destination,Special_Handling
ORD001,Express,Electronics,,Mumbai,Delhi,None
";
        let orders: Vec<Order> = parse_table("orders", content.as_bytes()).unwrap();

        assert_eq!(orders.len(), 1);
        assert!(orders[0].order_value_inr.is_nan());
    }

    #[test]
    fn test_malformed_row_fails_table() {
        let content = "\
Vehicle_ID,Vehicle_Type,Capacity_KG,Fuel_Efficiency_KM_per_L,Current_Location,Status,Age_Years,CO2_Emissions_Kg_per_KM
VEH001,Small_Van,not-a-number,15.2,Mumbai,Available,2.5,0.18
";
        let result: Result<Vec<Vehicle>, _> = parse_table("vehicles", content.as_bytes());

        assert!(matches!(result, Err(LoadError::Csv { .. })));
    }

    #[test]
    fn test_read_missing_file() {
        let result: Result<Vec<Vehicle>, _> =
            read_table("vehicles", "/definitely/not/here/vehicle_fleet.csv");

        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }
}
