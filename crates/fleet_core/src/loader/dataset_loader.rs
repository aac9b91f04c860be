use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    data::dataset::{Dataset, LoadWarning},
    loader::{
        cost_breakdown_reader::read_cost_breakdown, csv_table::read_table, load_error::LoadError,
        table_file::TableFile,
    },
};

fn recover<T: Default>(
    table: TableFile,
    result: Result<T, LoadError>,
    warnings: &mut Vec<LoadWarning>,
) -> T {
    match result {
        Ok(rows) => rows,
        Err(LoadError::NotFound(_)) if table.is_optional() => T::default(),
        Err(error) => {
            warn!(table = table.table_name(), "{}", error);
            warnings.push(LoadWarning::new(table.table_name(), error.to_string()));
            T::default()
        }
    }
}

fn load_rows<T: serde::de::DeserializeOwned>(
    dir: &Path,
    table: TableFile,
    warnings: &mut Vec<LoadWarning>,
) -> Vec<T> {
    let result = read_table(table.table_name(), dir.join(table.file_name()));
    recover(table, result, warnings)
}

/// Loads every table from `dir`. A table that cannot be read is replaced by an empty one and
/// reported in [`Dataset::warnings`]; loading never fails as a whole.
#[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
pub fn load_dataset<P: AsRef<Path>>(dir: P) -> Dataset {
    let dir = dir.as_ref();
    let mut warnings = vec![];

    let orders = load_rows(dir, TableFile::Orders, &mut warnings);
    let routes = load_rows(dir, TableFile::Routes, &mut warnings);
    let vehicles = load_rows(dir, TableFile::Vehicles, &mut warnings);
    let delivery_performance = load_rows(dir, TableFile::DeliveryPerformance, &mut warnings);
    let cost_breakdown = recover(
        TableFile::CostBreakdown,
        read_cost_breakdown(dir.join(TableFile::CostBreakdown.file_name())),
        &mut warnings,
    );
    let feedback = load_rows(dir, TableFile::CustomerFeedback, &mut warnings);
    let inventory = load_rows(dir, TableFile::WarehouseInventory, &mut warnings);

    let dataset = Dataset {
        orders,
        vehicles,
        routes,
        delivery_performance,
        cost_breakdown,
        feedback,
        inventory,
        warnings,
    };

    info!(
        orders = dataset.orders.len(),
        vehicles = dataset.vehicles.len(),
        routes = dataset.routes.len(),
        deliveries = dataset.delivery_performance.len(),
        costs = dataset.cost_breakdown.len(),
        feedback = dataset.feedback.len(),
        warnings = dataset.warnings.len(),
        "Dataset loaded"
    );

    dataset
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use super::*;

    fn fixtures_dir() -> std::path::PathBuf {
        env::current_dir().unwrap().join("tests/fixtures")
    }

    #[test]
    fn test_load_fixture_dataset() {
        let dataset = load_dataset(fixtures_dir());

        assert!(dataset.warnings.is_empty(), "{:?}", dataset.warnings);
        assert_eq!(dataset.orders.len(), 6);
        assert_eq!(dataset.vehicles.len(), 8);
        assert_eq!(dataset.routes.len(), 6);
        assert_eq!(dataset.delivery_performance.len(), 6);
        assert_eq!(dataset.cost_breakdown.len(), 4);
        assert_eq!(dataset.feedback.len(), 5);
        assert_eq!(dataset.inventory.len(), 3);
    }

    #[test]
    fn test_missing_files_become_empty_tables_with_warnings() {
        let dir = tempfile::tempdir().unwrap();
        fs::copy(
            fixtures_dir().join("orders.csv"),
            dir.path().join("orders.csv"),
        )
        .unwrap();

        let dataset = load_dataset(dir.path());

        assert_eq!(dataset.orders.len(), 6);
        assert!(dataset.vehicles.is_empty());
        assert!(dataset.cost_breakdown.is_empty());

        let tables: Vec<&str> = dataset.warnings.iter().map(|w| w.table.as_str()).collect();
        assert_eq!(
            tables,
            vec![
                "routes",
                "vehicles",
                "delivery_performance",
                "cost_breakdown",
                "customer_feedback"
            ]
        );
    }

    #[test]
    fn test_malformed_table_is_replaced_and_others_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::copy(
            fixtures_dir().join("orders.csv"),
            dir.path().join("orders.csv"),
        )
        .unwrap();
        fs::write(
            dir.path().join("vehicle_fleet.csv"),
            "Vehicle_ID,Vehicle_Type,Capacity_KG\nVEH001,Small_Van,lots\n",
        )
        .unwrap();

        let dataset = load_dataset(dir.path());

        assert_eq!(dataset.orders.len(), 6);
        assert!(dataset.vehicles.is_empty());
        assert!(
            dataset
                .warnings
                .iter()
                .any(|warning| warning.table == "vehicles")
        );
    }

    #[test]
    fn test_blank_age_cell_keeps_fleet() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("vehicle_fleet.csv"),
            "Vehicle_ID,Vehicle_Type,Capacity_KG,Fuel_Efficiency_KM_per_L,Current_Location,\
Status,Age_Years,CO2_Emissions_Kg_per_KM\n\
VEH001,Small_Van,800,15.2,Mumbai,Available,4,0.18\n\
VEH002,Medium_Truck,3000,8.1,Delhi,Available,,0.35\n",
        )
        .unwrap();

        let dataset = load_dataset(dir.path());

        assert_eq!(dataset.vehicles.len(), 2);
        assert!(dataset.vehicles[1].age_years.is_nan());
        assert!(
            dataset
                .warnings
                .iter()
                .all(|warning| warning.table != "vehicles")
        );
    }
}
