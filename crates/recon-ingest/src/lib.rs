//! CSV ingestion: the spreadsheet-reading collaborator for the
//! reconciliation engine. Produces already-parsed [`recon_model::RawTable`]
//! values; all schema and value validation happens in `recon-engine`.

pub mod csv_table;
pub mod discovery;

pub use csv_table::read_csv_table;
pub use discovery::{
    CONVERSION_FILE, InputFiles, PRIMARY_FILE, SECONDARY_FILE, SERIALIZATION_FILE,
    discover_input_files,
};
