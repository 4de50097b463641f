//! One side's inventory: schema check, row validation, and the working
//! copy every comparison pass reads from.

use recon_model::normalize::blank_to_none;
use recon_model::{Discrepancy, InventoryRow, Location, RawTable, Side, ValidationError};

use crate::ConversionIndex;
use crate::serialization::NonSerializedSet;

/// Required columns of an inventory table, in schema order.
pub const INVENTORY_COLUMNS: [&str; 5] = [
    "Part Number",
    "Serial",
    "Quantity",
    "Warehouse",
    "Sub Inventory",
];

/// Column rows are sorted by before validation when none is configured.
pub const DEFAULT_SORT_COLUMN: &str = "Part Number";

/// A validated inventory worksheet for one side.
///
/// Built once from raw rows against the shared [`ConversionIndex`]. The
/// row set is the single authoritative working copy: the serialization
/// override mutates it exactly once, after which comparison passes only
/// read. Discrepancies accumulate append-only in emission order.
#[derive(Debug, Clone)]
pub struct InventoryDataset {
    side: Side,
    rows: Vec<InventoryRow>,
    errors: Vec<ValidationError>,
    discrepancies: Vec<Discrepancy>,
}

impl InventoryDataset {
    /// Validate a raw table, sorting rows by [`DEFAULT_SORT_COLUMN`].
    pub fn validate(side: Side, table: &RawTable, index: &ConversionIndex) -> Self {
        Self::validate_sorted(side, table, index, DEFAULT_SORT_COLUMN)
    }

    /// Validate a raw table with an explicit sort column.
    ///
    /// Rows are stable-sorted by `sort_by` (falling back to part number if
    /// the column does not exist) so row numbering in error messages and
    /// all downstream iteration are deterministic. Per row: quantity must
    /// parse as an integer above zero, and the location must resolve
    /// through the index for this side; either failure excludes the row
    /// and records one non-fatal error. A missing required column is
    /// fatal: no rows are processed at all.
    pub fn validate_sorted(
        side: Side,
        table: &RawTable,
        index: &ConversionIndex,
        sort_by: &str,
    ) -> Self {
        let mut errors = Vec::new();
        let missing = table.missing_columns(&INVENTORY_COLUMNS);
        if !missing.is_empty() {
            for column in missing {
                errors.push(ValidationError::fatal(format!("Missing field {column}")));
            }
            return Self {
                side,
                rows: Vec::new(),
                errors,
                discrepancies: Vec::new(),
            };
        }

        let indices: Vec<usize> = INVENTORY_COLUMNS
            .iter()
            .filter_map(|column| table.column_index(column))
            .collect();
        debug_assert_eq!(indices.len(), INVENTORY_COLUMNS.len());
        let &[part_idx, serial_idx, quantity_idx, warehouse_idx, sub_idx] = indices.as_slice()
        else {
            unreachable!("all inventory columns resolved above");
        };
        let sort_idx = table.column_index(sort_by).unwrap_or(part_idx);

        let mut ordered: Vec<&Vec<String>> = table.rows.iter().collect();
        ordered.sort_by(|a, b| RawTable::cell(a, sort_idx).cmp(RawTable::cell(b, sort_idx)));

        let mut rows = Vec::new();
        for (number, row) in ordered.iter().enumerate() {
            let number = number + 1;

            let quantity = match RawTable::cell(row, quantity_idx).trim().parse::<u32>() {
                Ok(value) if value > 0 => value,
                _ => {
                    errors.push(ValidationError::row(format!(
                        "'Quantity' must be a number above 0. failed at row {number}"
                    )));
                    continue;
                }
            };

            let warehouse = RawTable::cell(row, warehouse_idx);
            let sub_inventory = RawTable::cell(row, sub_idx);
            if index
                .find_conversion(side, warehouse, sub_inventory)
                .is_none()
            {
                errors.push(ValidationError::row(format!(
                    "Missing conversion for warehouse {warehouse} {sub_inventory}. failed at row {number}"
                )));
                continue;
            }

            rows.push(InventoryRow {
                part_number: RawTable::cell(row, part_idx).to_string(),
                serial: blank_to_none(RawTable::cell(row, serial_idx)),
                quantity,
                location: Location::new(warehouse, sub_inventory),
            });
        }

        Self {
            side,
            rows,
            errors,
            discrepancies: Vec::new(),
        }
    }

    /// Clear serials on rows whose part number is declared non-serialized.
    ///
    /// Mutates the working copy in place. Idempotent; never removes or
    /// reorders rows. Must run before any comparison pass reads the
    /// dataset.
    pub fn suppress_serials(&mut self, non_serialized: &NonSerializedSet) {
        if non_serialized.is_empty() {
            return;
        }
        for row in &mut self.rows {
            if non_serialized.contains(&row.part_number) {
                row.serial = None;
            }
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// The working copy of valid rows, in validation order.
    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    /// Accumulated validation errors, in insertion order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// False once a fatal schema error was recorded; such a dataset never
    /// participates in comparison.
    pub fn is_valid(&self) -> bool {
        !self.errors.iter().any(ValidationError::is_fatal)
    }

    /// Discrepancies flagged against this side, in emission order.
    pub fn discrepancies(&self) -> &[Discrepancy] {
        &self.discrepancies
    }

    /// Append one comparison pass's findings to the accumulator.
    pub fn record_discrepancies(&mut self, found: Vec<Discrepancy>) {
        self.discrepancies.extend(found);
    }
}
