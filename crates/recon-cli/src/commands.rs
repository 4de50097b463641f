//! Subcommand entry points.

use anyhow::Result;
use comfy_table::Table;

use recon_engine::{CONVERSION_COLUMNS, INVENTORY_COLUMNS, SERIALIZATION_COLUMNS};
use recon_ingest::{CONVERSION_FILE, PRIMARY_FILE, SECONDARY_FILE, SERIALIZATION_FILE};

use crate::cli::{CheckArgs, ResultFormatArg};
use crate::pipeline::{CheckConfig, run_check};
use crate::summary::{apply_table_style, header_cell};
use crate::types::CheckResult;

pub fn run_check_command(args: &CheckArgs) -> Result<CheckResult> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.data_folder.join("output"));
    let (write_csv, write_json) = match args.format {
        ResultFormatArg::Csv => (true, false),
        ResultFormatArg::Json => (false, true),
        ResultFormatArg::Both => (true, true),
    };
    let config = CheckConfig {
        data_folder: args.data_folder.clone(),
        output_dir,
        sort_by: args.sort_by.clone(),
        write_csv,
        write_json,
        dry_run: args.dry_run,
    };
    run_check(&config)
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("File"), header_cell("Required Columns")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        format!("{CONVERSION_FILE}.csv"),
        CONVERSION_COLUMNS.join(", "),
    ]);
    table.add_row(vec![
        format!("{PRIMARY_FILE}.csv"),
        INVENTORY_COLUMNS.join(", "),
    ]);
    table.add_row(vec![
        format!("{SECONDARY_FILE}.csv"),
        INVENTORY_COLUMNS.join(", "),
    ]);
    table.add_row(vec![
        format!("{SERIALIZATION_FILE}.csv (optional)"),
        SERIALIZATION_COLUMNS.join(", "),
    ]);
    println!("{table}");
    Ok(())
}
