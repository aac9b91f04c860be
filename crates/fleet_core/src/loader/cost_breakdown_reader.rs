use std::{fs::File, io::Read, path::Path};

use csv::StringRecord;

use crate::{
    data::cost_breakdown::{CostBreakdown, CostBreakdownTable, CostComponent},
    loader::{csv_table::reader_builder, load_error::LoadError},
};

pub const ORDER_ID_COLUMN: &str = "Order_ID";

const TABLE: &str = "cost_breakdown";

fn is_numeric_column(records: &[StringRecord], column: usize) -> bool {
    records.iter().all(|record| match record.get(column) {
        Some(cell) if !cell.is_empty() => cell.parse::<f64>().is_ok(),
        _ => true,
    })
}

/// Reads a cost breakdown table. Every numeric column other than the order id is a cost
/// component; empty cells count as zero.
pub fn parse_cost_breakdown<R: Read>(reader: R) -> Result<CostBreakdownTable, LoadError> {
    let mut reader = reader_builder().from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|error| LoadError::csv(TABLE, error))?
        .clone();

    let id_column = headers
        .iter()
        .position(|header| header == ORDER_ID_COLUMN)
        .ok_or_else(|| LoadError::MissingColumn {
            table: TABLE.to_owned(),
            column: ORDER_ID_COLUMN.to_owned(),
        })?;

    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| LoadError::csv(TABLE, error))?;

    let component_columns: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|&(column, _)| column != id_column && is_numeric_column(&records, column))
        .map(|(column, name)| (column, name.to_owned()))
        .collect();

    let rows = records
        .iter()
        .map(|record| {
            let components = component_columns
                .iter()
                .map(|(column, name)| CostComponent {
                    name: name.clone(),
                    value: record
                        .get(*column)
                        .and_then(|cell| cell.parse::<f64>().ok())
                        .unwrap_or(0.0),
                })
                .collect();

            CostBreakdown::new(
                record.get(id_column).unwrap_or_default().to_owned(),
                components,
            )
        })
        .collect();

    Ok(CostBreakdownTable::new(
        component_columns.into_iter().map(|(_, name)| name).collect(),
        rows,
    ))
}

pub fn read_cost_breakdown<P: AsRef<Path>>(path: P) -> Result<CostBreakdownTable, LoadError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|error| LoadError::csv(TABLE, csv::Error::from(error)))?;
    parse_cost_breakdown(file)
}
