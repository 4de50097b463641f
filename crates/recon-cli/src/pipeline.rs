//! The `check` pipeline: discover input files, validate them, reconcile,
//! and write results.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{error, info, info_span, warn};

use recon_engine::{ConversionIndex, InventoryDataset, NonSerializedSet, reconcile};
use recon_ingest::{discover_input_files, read_csv_table};
use recon_model::{Severity, Side, ValidationError};
use recon_report::{write_results_csv, write_results_json};

use crate::types::CheckResult;

/// Resolved configuration for one `check` run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub data_folder: PathBuf,
    pub output_dir: PathBuf,
    pub sort_by: String,
    pub write_csv: bool,
    pub write_json: bool,
    pub dry_run: bool,
}

/// Run the full reconciliation pipeline.
///
/// Fatal validation errors stop the run before comparison; the returned
/// result then carries the errors and no outcome. Row-level errors are
/// recorded and the run continues without the affected rows.
pub fn run_check(config: &CheckConfig) -> Result<CheckResult> {
    let span = info_span!("check", data_folder = %config.data_folder.display());
    let _guard = span.enter();

    let files = discover_input_files(&config.data_folder)?;
    let mut result = CheckResult::new(config.data_folder.clone(), config.output_dir.clone());

    let index = ConversionIndex::from_table(&read_csv_table(&files.conversion)?);
    log_errors("conversion", index.errors());
    result.push_errors("conversion", index.errors());
    if !index.is_valid() {
        error!("conversion table is invalid, stopping before comparison");
        result.has_errors = true;
        return Ok(result);
    }
    info!(rules = index.rules().len(), "conversion table loaded");

    let (non_serialized, serialization_errors) = match &files.serialization {
        Some(path) => NonSerializedSet::from_table(&read_csv_table(path)?),
        None => (NonSerializedSet::default(), Vec::new()),
    };
    log_errors("serialization", &serialization_errors);
    result.push_errors("serialization", &serialization_errors);
    if serialization_errors.iter().any(ValidationError::is_fatal) {
        error!("serialization table is invalid, stopping before comparison");
        result.has_errors = true;
        return Ok(result);
    }
    if !non_serialized.is_empty() {
        info!(items = non_serialized.len(), "serialization override loaded");
    }

    let primary = InventoryDataset::validate_sorted(
        Side::Primary,
        &read_csv_table(&files.primary)?,
        &index,
        &config.sort_by,
    );
    log_errors("primary", primary.errors());
    result.push_errors("primary", primary.errors());
    if !primary.is_valid() {
        error!("primary worksheet is invalid, stopping before comparison");
        result.has_errors = true;
        return Ok(result);
    }

    let secondary = InventoryDataset::validate_sorted(
        Side::Secondary,
        &read_csv_table(&files.secondary)?,
        &index,
        &config.sort_by,
    );
    log_errors("secondary", secondary.errors());
    result.push_errors("secondary", secondary.errors());
    if !secondary.is_valid() {
        error!("secondary worksheet is invalid, stopping before comparison");
        result.has_errors = true;
        return Ok(result);
    }

    info!(
        primary_rows = primary.rows().len(),
        secondary_rows = secondary.rows().len(),
        "worksheets validated"
    );

    let outcome = reconcile(primary, secondary, &index, &non_serialized)?;
    info!(
        discrepancies = outcome.report.total(),
        "reconciliation finished"
    );

    if config.dry_run {
        info!("dry run, skipping result files");
    } else {
        if config.write_csv {
            result.results_csv = Some(write_results_csv(&config.output_dir, &outcome.report)?);
        }
        if config.write_json {
            result.results_json = Some(write_results_json(&config.output_dir, &outcome)?);
        }
    }
    result.outcome = Some(outcome);
    Ok(result)
}

fn log_errors(source: &str, errors: &[ValidationError]) {
    for error in errors {
        match error.severity {
            Severity::Error => error!(source, "{}", error.message),
            Severity::Warning => warn!(source, "{}", error.message),
        }
    }
}
