use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use recon_model::RawTable;

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Read a CSV file into a [`RawTable`].
///
/// Cells are trimmed and BOM-stripped; fully blank records are skipped;
/// the first remaining record is the header. Data rows are padded or cut
/// to the header width so downstream column indexing is always in range.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    parse_table(reader).with_context(|| format!("parse csv: {}", path.display()))
}

fn parse_table<R: Read>(mut reader: csv::Reader<R>) -> Result<RawTable> {
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.context("read record")?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(RawTable::default());
    }
    let headers = raw_rows.remove(0);
    let width = headers.len();
    let rows = raw_rows
        .into_iter()
        .map(|mut row| {
            row.resize(width, String::new());
            row
        })
        .collect();
    Ok(RawTable::new(headers, rows))
}
