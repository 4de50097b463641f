use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use recon_engine::DiscrepancyReport;

/// Default file name of the CSV results table.
pub const RESULTS_CSV: &str = "results.csv";

/// Write the discrepancy table to `results.csv` under `output_dir`.
///
/// Header row first, then all flagged rows in report order.
pub fn write_results_csv(output_dir: &Path, report: &DiscrepancyReport) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let output_path = output_dir.join(RESULTS_CSV);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("write results: {}", output_path.display()))?;
    for row in report.to_table() {
        writer.write_record(&row).context("write results row")?;
    }
    writer.flush().context("flush results")?;
    Ok(output_path)
}
