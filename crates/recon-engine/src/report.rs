//! The assembled reconciliation output table.

use serde::Serialize;

use recon_model::{Discrepancy, DiscrepancyKind, Side};

use crate::InventoryDataset;

/// Output columns: the valid inventory fields plus the issue text.
pub const REPORT_COLUMNS: [&str; 6] = [
    "Part Number",
    "Serial",
    "Quantity",
    "Warehouse",
    "Sub Inventory",
    "Issue",
];

/// All flagged rows from both directions, in the fixed output order:
/// primary side first, then secondary, each in its own accumulation order
/// (serial pass before quantity pass). Never deduplicated — a row may
/// appear once per failed direction.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscrepancyReport {
    pub primary: Vec<Discrepancy>,
    pub secondary: Vec<Discrepancy>,
}

impl DiscrepancyReport {
    pub fn assemble(primary: &InventoryDataset, secondary: &InventoryDataset) -> Self {
        Self {
            primary: primary.discrepancies().to_vec(),
            secondary: secondary.discrepancies().to_vec(),
        }
    }

    pub fn header() -> Vec<String> {
        REPORT_COLUMNS.iter().map(|c| (*c).to_string()).collect()
    }

    /// Every flagged row with its owning side, in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &Discrepancy)> {
        self.primary
            .iter()
            .map(|d| (Side::Primary, d))
            .chain(self.secondary.iter().map(|d| (Side::Secondary, d)))
    }

    /// The full output table: header row first, then all flagged rows.
    pub fn to_table(&self) -> Vec<Vec<String>> {
        let mut table = vec![Self::header()];
        table.extend(self.iter().map(|(_, discrepancy)| row_cells(discrepancy)));
        table
    }

    pub fn total(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    pub fn count_of(&self, kind: DiscrepancyKind) -> usize {
        self.iter()
            .filter(|(_, discrepancy)| discrepancy.kind == kind)
            .count()
    }

    pub fn side_count(&self, side: Side) -> usize {
        match side {
            Side::Primary => self.primary.len(),
            Side::Secondary => self.secondary.len(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

fn row_cells(discrepancy: &Discrepancy) -> Vec<String> {
    vec![
        discrepancy.part_number.clone(),
        discrepancy.serial.clone().unwrap_or_default(),
        discrepancy.quantity.to_string(),
        discrepancy.location.warehouse.clone(),
        discrepancy.location.sub_inventory.clone(),
        discrepancy.issue.clone(),
    ]
}
