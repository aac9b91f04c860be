pub mod cost_breakdown_reader;
pub mod csv_table;
pub mod dataset_loader;
pub mod load_error;
pub mod table_file;
