//! Result types shared between the pipeline and the summary printer.

use std::path::PathBuf;

use recon_engine::ReconOutcome;
use recon_model::ValidationError;

/// Validation errors attributed to one input file.
#[derive(Debug, Clone)]
pub struct SourceErrors {
    /// File stem of the input the errors belong to.
    pub source: String,
    pub errors: Vec<ValidationError>,
}

/// Everything a `check` run produced, for summary printing and exit code.
#[derive(Debug)]
pub struct CheckResult {
    pub data_folder: PathBuf,
    pub output_dir: PathBuf,
    /// Validation errors per input file, in processing order.
    pub sources: Vec<SourceErrors>,
    /// Absent when a fatal validation error stopped the run before
    /// comparison.
    pub outcome: Option<ReconOutcome>,
    pub results_csv: Option<PathBuf>,
    pub results_json: Option<PathBuf>,
    pub has_errors: bool,
}

impl CheckResult {
    pub fn new(data_folder: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            data_folder,
            output_dir,
            sources: Vec::new(),
            outcome: None,
            results_csv: None,
            results_json: None,
            has_errors: false,
        }
    }

    /// Record the validation errors of one input file.
    pub fn push_errors(&mut self, source: &str, errors: &[ValidationError]) {
        if errors.is_empty() {
            return;
        }
        self.sources.push(SourceErrors {
            source: source.to_string(),
            errors: errors.to_vec(),
        });
    }
}
