//! Serial-number matching: one directed pass over the source dataset's
//! serialized rows against the comparison target.

use recon_model::normalize::normalize_serial;
use recon_model::{Discrepancy, DiscrepancyKind, InventoryRow};

use crate::{ConversionIndex, InventoryDataset};

/// Cross-check every serialized source row against the target dataset.
///
/// Serials compare trimmed-uppercase; the reported row keeps its original
/// casing. A source row whose location has no conversion is skipped —
/// validation guarantees retained rows resolve, so a miss here only means
/// the caller bypassed validation. Returns the findings in source row
/// order; the caller appends them to the source dataset's accumulator.
pub fn check_serials(
    source: &InventoryDataset,
    target: &InventoryDataset,
    index: &ConversionIndex,
) -> Vec<Discrepancy> {
    let opposite = source.side().opposite();
    let mut found = Vec::new();

    for row in source.rows() {
        let Some(serial) = row.serial.as_deref() else {
            continue;
        };
        let Some(expected) = index.find_conversion(
            source.side(),
            &row.location.warehouse,
            &row.location.sub_inventory,
        ) else {
            continue;
        };

        let serial_key = normalize_serial(serial);
        let matches_serial = |candidate: &InventoryRow| {
            candidate
                .serial
                .as_deref()
                .is_some_and(|value| normalize_serial(value) == serial_key)
        };

        if target
            .rows()
            .iter()
            .any(|candidate| matches_serial(candidate) && candidate.location == *expected)
        {
            continue;
        }

        // Fall back to a location-agnostic search: first match in target
        // input order wins.
        let discrepancy = match target
            .rows()
            .iter()
            .find(|candidate| matches_serial(candidate))
        {
            Some(elsewhere) => Discrepancy {
                part_number: row.part_number.clone(),
                serial: row.serial.clone(),
                quantity: u64::from(row.quantity),
                location: row.location.clone(),
                kind: DiscrepancyKind::SerialLocationMismatch,
                issue: format!(
                    "Mismatch serial {serial} in {opposite} worksheet expected to be in \
                     '{expected}' but found in warehouse: '{}'",
                    elsewhere.location
                ),
            },
            None => Discrepancy {
                part_number: row.part_number.clone(),
                serial: row.serial.clone(),
                quantity: u64::from(row.quantity),
                location: row.location.clone(),
                kind: DiscrepancyKind::MissingSerial,
                issue: format!(
                    "Missing serial {serial} in {opposite} worksheet warehouse: '{expected}'"
                ),
            },
        };
        found.push(discrepancy);
    }

    found
}
