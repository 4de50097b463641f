//! Result writers: the report-consuming collaborator of the
//! reconciliation engine. Writes the ordered discrepancy table as CSV and
//! a versioned JSON payload.

pub mod csv_out;
pub mod json_out;

pub use csv_out::{RESULTS_CSV, write_results_csv};
pub use json_out::{RESULTS_JSON, ReportPayload, SideSummary, report_payload, write_results_json};
