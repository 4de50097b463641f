use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use recon_engine::ReconOutcome;
use recon_model::Severity;

use crate::types::CheckResult;

pub fn print_summary(result: &CheckResult) {
    println!("Data folder: {}", result.data_folder.display());
    if let Some(path) = &result.results_csv {
        println!("Results CSV: {}", path.display());
    }
    if let Some(path) = &result.results_json {
        println!("Results JSON: {}", path.display());
    }

    print_error_table(result);

    let Some(outcome) = &result.outcome else {
        eprintln!("reconciliation stopped: input validation failed");
        return;
    };

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Side"),
        header_cell("Rows"),
        header_cell("Row Errors"),
        header_cell("Discrepancies"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for dataset in [&outcome.primary, &outcome.secondary] {
        table.add_row(vec![
            Cell::new(dataset.side().label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(dataset.rows().len()),
            count_cell(dataset.errors().len(), Color::Yellow),
            count_cell(dataset.discrepancies().len(), Color::Red),
        ]);
    }
    println!("{table}");

    print_discrepancy_table(outcome);
}

fn print_error_table(result: &CheckResult) {
    if result.sources.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Severity"),
        header_cell("Message"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for source in &result.sources {
        for error in &source.errors {
            table.add_row(vec![
                Cell::new(&source.source),
                severity_cell(error.severity),
                Cell::new(&error.message),
            ]);
        }
    }
    println!();
    println!("Validation issues:");
    println!("{table}");
}

fn print_discrepancy_table(outcome: &ReconOutcome) {
    if outcome.report.is_clean() {
        println!("No discrepancies found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Side"),
        header_cell("Part Number"),
        header_cell("Serial"),
        header_cell("Quantity"),
        header_cell("Warehouse"),
        header_cell("Sub Inventory"),
        header_cell("Issue"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for (side, discrepancy) in outcome.report.iter() {
        let serial_cell = match &discrepancy.serial {
            Some(serial) => Cell::new(serial),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(side.label()),
            Cell::new(&discrepancy.part_number),
            serial_cell,
            Cell::new(discrepancy.quantity),
            Cell::new(&discrepancy.location.warehouse),
            Cell::new(&discrepancy.location.sub_inventory),
            Cell::new(&discrepancy.issue),
        ]);
    }
    println!();
    println!("Discrepancies:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
    let columns = table.column_count();
    if columns >= 3 {
        let mut constraints = vec![ColumnConstraint::UpperBoundary(Width::Fixed(16)); columns - 1];
        constraints.push(ColumnConstraint::UpperBoundary(Width::Percentage(45)));
        table.set_constraints(constraints);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
