use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use recon_engine::ReconOutcome;
use recon_model::{Discrepancy, Side, ValidationError};

/// Default file name of the JSON results payload.
pub const RESULTS_JSON: &str = "discrepancy_report.json";

const REPORT_SCHEMA: &str = "stock-recon.discrepancy-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub discrepancy_count: usize,
    pub sides: Vec<SideSummary>,
}

#[derive(Debug, Serialize)]
pub struct SideSummary {
    pub side: Side,
    pub valid_rows: usize,
    pub validation_errors: Vec<ValidationError>,
    pub discrepancies: Vec<Discrepancy>,
}

/// Build the versioned JSON payload for a reconciliation outcome.
pub fn report_payload(outcome: &ReconOutcome) -> ReportPayload {
    let sides = [&outcome.primary, &outcome.secondary]
        .into_iter()
        .map(|dataset| SideSummary {
            side: dataset.side(),
            valid_rows: dataset.rows().len(),
            validation_errors: dataset.errors().to_vec(),
            discrepancies: dataset.discrepancies().to_vec(),
        })
        .collect();
    ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        discrepancy_count: outcome.report.total(),
        sides,
    }
}

/// Write the JSON payload to `discrepancy_report.json` under `output_dir`.
pub fn write_results_json(output_dir: &Path, outcome: &ReconOutcome) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let output_path = output_dir.join(RESULTS_JSON);
    let payload = report_payload(outcome);
    let json = serde_json::to_string_pretty(&payload).context("serialize report payload")?;
    std::fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("write report: {}", output_path.display()))?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recon_engine::{ConversionIndex, InventoryDataset, NonSerializedSet, reconcile};
    use recon_model::RawTable;

    fn outcome() -> ReconOutcome {
        let index = ConversionIndex::from_table(&RawTable::new(
            vec![
                "Primary Warehouse".to_string(),
                "Primary Sub Inventory".to_string(),
                "Secondary Warehouse".to_string(),
                "Secondary Sub Inventory".to_string(),
            ],
            vec![vec![
                "W1".to_string(),
                "A".to_string(),
                "W2".to_string(),
                "B".to_string(),
            ]],
        ));
        let headers = vec![
            "Part Number".to_string(),
            "Serial".to_string(),
            "Quantity".to_string(),
            "Warehouse".to_string(),
            "Sub Inventory".to_string(),
        ];
        let primary = InventoryDataset::validate(
            Side::Primary,
            &RawTable::new(
                headers.clone(),
                vec![vec![
                    "PN100".to_string(),
                    "SER1".to_string(),
                    "1".to_string(),
                    "W1".to_string(),
                    "A".to_string(),
                ]],
            ),
            &index,
        );
        let secondary =
            InventoryDataset::validate(Side::Secondary, &RawTable::new(headers, vec![]), &index);
        reconcile(primary, secondary, &index, &NonSerializedSet::default()).expect("reconcile")
    }

    #[test]
    fn payload_carries_both_sides_in_order() {
        let payload = report_payload(&outcome());
        assert_eq!(payload.schema, REPORT_SCHEMA);
        assert_eq!(payload.discrepancy_count, 1);
        assert_eq!(payload.sides.len(), 2);
        assert_eq!(payload.sides[0].side, Side::Primary);
        assert_eq!(payload.sides[1].side, Side::Secondary);
        assert_eq!(payload.sides[0].discrepancies.len(), 1);

        let json = serde_json::to_value(&payload).expect("serialize payload");
        assert_eq!(json["sides"][0]["side"], "primary");
        assert_eq!(
            json["sides"][0]["discrepancies"][0]["kind"],
            "missing_serial"
        );
    }
}
