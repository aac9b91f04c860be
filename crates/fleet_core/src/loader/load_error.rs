use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Malformed CSV in table {table}: {source}")]
    Csv {
        table: String,
        #[source]
        source: csv::Error,
    },

    #[error("Table {table} has no column {column}")]
    MissingColumn { table: String, column: String },
}

impl LoadError {
    pub fn csv(table: &str, source: csv::Error) -> Self {
        LoadError::Csv {
            table: table.to_owned(),
            source,
        }
    }
}
