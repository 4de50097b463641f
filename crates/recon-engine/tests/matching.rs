//! Directed serial-matching and quantity-reconciliation tests.

use recon_engine::{ConversionIndex, InventoryDataset, quantity, serial};
use recon_model::{DiscrepancyKind, RawTable, Side};

fn conversion_index(rows: Vec<[&str; 4]>) -> ConversionIndex {
    let table = RawTable::new(
        vec![
            "Primary Warehouse".to_string(),
            "Primary Sub Inventory".to_string(),
            "Secondary Warehouse".to_string(),
            "Secondary Sub Inventory".to_string(),
        ],
        rows.into_iter()
            .map(|row| row.into_iter().map(String::from).collect())
            .collect(),
    );
    ConversionIndex::from_table(&table)
}

fn dataset(side: Side, index: &ConversionIndex, rows: Vec<[&str; 5]>) -> InventoryDataset {
    let table = RawTable::new(
        vec![
            "Part Number".to_string(),
            "Serial".to_string(),
            "Quantity".to_string(),
            "Warehouse".to_string(),
            "Sub Inventory".to_string(),
        ],
        rows.into_iter()
            .map(|row| row.into_iter().map(String::from).collect())
            .collect(),
    );
    let dataset = InventoryDataset::validate(side, &table, index);
    assert!(dataset.is_valid());
    dataset
}

#[test]
fn serial_present_at_expected_location_matches() {
    let index = conversion_index(vec![["W1", "A", "W2", "B"]]);
    let primary = dataset(Side::Primary, &index, vec![["PN100", "SER1", "1", "W1", "A"]]);
    let secondary = dataset(
        Side::Secondary,
        &index,
        vec![["PN100", "SER1", "1", "W2", "B"]],
    );

    assert!(serial::check_serials(&primary, &secondary, &index).is_empty());
    assert!(serial::check_serials(&secondary, &primary, &index).is_empty());
}

#[test]
fn missing_serial_is_flagged_once_and_only_forward() {
    let index = conversion_index(vec![["W1", "A", "W2", "B"]]);
    let primary = dataset(Side::Primary, &index, vec![["PN100", "SER1", "1", "W1", "A"]]);
    let secondary = dataset(Side::Secondary, &index, vec![]);

    let forward = serial::check_serials(&primary, &secondary, &index);
    assert_eq!(forward.len(), 1);
    assert_eq!(forward[0].kind, DiscrepancyKind::MissingSerial);
    assert_eq!(
        forward[0].issue,
        "Missing serial SER1 in Secondary worksheet warehouse: 'W2 B'"
    );
    assert_eq!(forward[0].part_number, "PN100");
    assert_eq!(forward[0].location.warehouse, "W1");

    // The secondary side has nothing to flag for that serial.
    let backward = serial::check_serials(&secondary, &primary, &index);
    assert!(backward.is_empty());
}

#[test]
fn serial_found_elsewhere_is_a_location_mismatch() {
    let index = conversion_index(vec![["W1", "A", "W2", "B"], ["W3", "C", "W4", "D"]]);
    let primary = dataset(Side::Primary, &index, vec![["PN100", "SER1", "1", "W1", "A"]]);
    let secondary = dataset(
        Side::Secondary,
        &index,
        vec![["PN100", "SER1", "1", "W4", "D"]],
    );

    let found = serial::check_serials(&primary, &secondary, &index);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, DiscrepancyKind::SerialLocationMismatch);
    assert_eq!(
        found[0].issue,
        "Mismatch serial SER1 in Secondary worksheet expected to be in 'W2 B' \
         but found in warehouse: 'W4 D'"
    );
}

#[test]
fn serial_matching_folds_case_and_whitespace_but_reports_original() {
    let index = conversion_index(vec![["W1", "A", "W2", "B"]]);
    let primary = dataset(
        Side::Primary,
        &index,
        vec![["PN100", " ser1 ", "1", "W1", "A"]],
    );
    let secondary = dataset(
        Side::Secondary,
        &index,
        vec![["PN100", "SER1", "1", "W2", "B"]],
    );

    assert!(serial::check_serials(&primary, &secondary, &index).is_empty());

    // And when it does miss, the original casing is reported.
    let empty = dataset(Side::Secondary, &index, vec![]);
    let found = serial::check_serials(&primary, &empty, &index);
    assert_eq!(found[0].serial.as_deref(), Some(" ser1 "));
}

#[test]
fn aggregated_quantities_reconcile_across_rows() {
    let index = conversion_index(vec![["W1", "A", "W2", "B"]]);
    let primary = dataset(
        Side::Primary,
        &index,
        vec![
            ["PN200", "", "3", "W1", "A"],
            ["PN200", "", "4", "W1", "A"],
        ],
    );
    let secondary = dataset(Side::Secondary, &index, vec![["PN200", "", "7", "W2", "B"]]);

    assert!(quantity::check_quantities(&primary, &secondary, &index).is_empty());
}

#[test]
fn differing_sums_produce_one_quantity_mismatch() {
    let index = conversion_index(vec![["W1", "A", "W2", "B"]]);
    let primary = dataset(
        Side::Primary,
        &index,
        vec![
            ["PN200", "", "3", "W1", "A"],
            ["PN200", "", "4", "W1", "A"],
        ],
    );
    let secondary = dataset(Side::Secondary, &index, vec![["PN200", "", "6", "W2", "B"]]);

    let found = quantity::check_quantities(&primary, &secondary, &index);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, DiscrepancyKind::QuantityMismatch);
    assert_eq!(found[0].quantity, 7);
    assert_eq!(
        found[0].issue,
        "Quantity mismatch in item PN200 in Secondary worksheet warehouse: \
         'W2 B' expected 7 actual 6"
    );
}

#[test]
fn absent_part_is_a_missing_item() {
    let index = conversion_index(vec![["W1", "A", "W2", "B"]]);
    let primary = dataset(Side::Primary, &index, vec![["PN200", "", "5", "W1", "A"]]);
    let secondary = dataset(Side::Secondary, &index, vec![["PN999", "", "5", "W2", "B"]]);

    let found = quantity::check_quantities(&primary, &secondary, &index);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, DiscrepancyKind::MissingItem);
    assert_eq!(
        found[0].issue,
        "Missing item PN200 in Secondary worksheet warehouse: 'W2 B'"
    );
    assert_eq!(found[0].serial, None);
    assert_eq!(found[0].quantity, 5);
}

#[test]
fn part_numbers_group_case_insensitively() {
    let index = conversion_index(vec![["W1", "A", "W2", "B"]]);
    let primary = dataset(
        Side::Primary,
        &index,
        vec![
            ["PN200", "", "3", "W1", "A"],
            ["pn200", "", "4", "W1", "A"],
        ],
    );
    let secondary = dataset(Side::Secondary, &index, vec![["Pn200", "", "7", "W2", "B"]]);

    assert!(quantity::check_quantities(&primary, &secondary, &index).is_empty());
}

#[test]
fn serialized_rows_are_excluded_from_source_grouping() {
    let index = conversion_index(vec![["W1", "A", "W2", "B"]]);
    let primary = dataset(
        Side::Primary,
        &index,
        vec![
            ["PN200", "SER1", "3", "W1", "A"],
            ["PN200", "", "4", "W1", "A"],
        ],
    );
    let secondary = dataset(Side::Secondary, &index, vec![["PN200", "", "4", "W2", "B"]]);

    assert!(quantity::check_quantities(&primary, &secondary, &index).is_empty());
}

#[test]
fn groups_emit_in_sorted_key_order() {
    let index = conversion_index(vec![["W1", "A", "W2", "B"], ["W3", "C", "W4", "D"]]);
    let primary = dataset(
        Side::Primary,
        &index,
        vec![
            ["PN900", "", "1", "W3", "C"],
            ["PN100", "", "1", "W1", "A"],
        ],
    );
    let secondary = dataset(Side::Secondary, &index, vec![]);

    let found = quantity::check_quantities(&primary, &secondary, &index);
    assert_eq!(found.len(), 2);
    // (W1, A) sorts before (W3, C) regardless of input order.
    assert_eq!(found[0].part_number, "PN100");
    assert_eq!(found[1].part_number, "PN900");
}
