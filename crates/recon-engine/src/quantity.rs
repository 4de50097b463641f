//! Quantity reconciliation: one directed pass comparing aggregate sums of
//! non-serialized rows across the conversion mapping.

use std::collections::BTreeMap;

use recon_model::normalize::normalize_part_key;
use recon_model::{Discrepancy, DiscrepancyKind, Location};

use crate::{ConversionIndex, InventoryDataset};

struct Group {
    /// First-seen original casing, used for reporting.
    part_number: String,
    total: u64,
}

/// Cross-check summed quantities of the source dataset's non-serialized
/// rows against the target dataset.
///
/// Rows group by `(warehouse, sub inventory, part number folded to
/// trimmed lowercase)`; the sorted map key order fixes emission order. A
/// group whose location has no conversion is not reconcilable and is
/// skipped. On the target side the sum covers all rows at the converted
/// location with the same part key, serialized or not.
pub fn check_quantities(
    source: &InventoryDataset,
    target: &InventoryDataset,
    index: &ConversionIndex,
) -> Vec<Discrepancy> {
    let opposite = source.side().opposite();

    let mut groups: BTreeMap<(Location, String), Group> = BTreeMap::new();
    for row in source.rows() {
        if row.is_serialized() {
            continue;
        }
        let key = (row.location.clone(), normalize_part_key(&row.part_number));
        groups
            .entry(key)
            .and_modify(|group| group.total += u64::from(row.quantity))
            .or_insert_with(|| Group {
                part_number: row.part_number.clone(),
                total: u64::from(row.quantity),
            });
    }

    let mut found = Vec::new();
    for ((location, part_key), group) in &groups {
        let Some(expected) =
            index.find_conversion(source.side(), &location.warehouse, &location.sub_inventory)
        else {
            continue;
        };

        let mut target_total = 0u64;
        let mut target_has_rows = false;
        for candidate in target.rows() {
            if candidate.location == *expected
                && normalize_part_key(&candidate.part_number) == *part_key
            {
                target_has_rows = true;
                target_total += u64::from(candidate.quantity);
            }
        }

        if !target_has_rows {
            found.push(Discrepancy {
                part_number: group.part_number.clone(),
                serial: None,
                quantity: group.total,
                location: location.clone(),
                kind: DiscrepancyKind::MissingItem,
                issue: format!(
                    "Missing item {} in {opposite} worksheet warehouse: '{expected}'",
                    group.part_number
                ),
            });
            continue;
        }

        if target_total != group.total {
            found.push(Discrepancy {
                part_number: group.part_number.clone(),
                serial: None,
                quantity: group.total,
                location: location.clone(),
                kind: DiscrepancyKind::QuantityMismatch,
                issue: format!(
                    "Quantity mismatch in item {} in {opposite} worksheet warehouse: \
                     '{expected}' expected {} actual {target_total}",
                    group.part_number, group.total
                ),
            });
        }
    }

    found
}
