//! Property tests for the serialization override.

use proptest::prelude::*;

use recon_engine::{ConversionIndex, InventoryDataset, NonSerializedSet};
use recon_model::{RawTable, Side};

fn conversion_index() -> ConversionIndex {
    ConversionIndex::from_table(&RawTable::new(
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
    ))
}

fn inventory_rows() -> impl Strategy<Value = Vec<(String, Option<String>, u32)>> {
    prop::collection::vec(
        (
            "[A-Za-z][A-Za-z0-9]{0,5}",
            prop::option::of("[A-Za-z0-9]{1,6}"),
            1u32..1000,
        ),
        0..20,
    )
}

proptest! {
    #[test]
    fn suppress_serials_is_idempotent(
        rows in inventory_rows(),
        non_serialized in prop::collection::btree_set("[A-Za-z][A-Za-z0-9]{0,5}", 0..8),
    ) {
        let index = conversion_index();
        let table = RawTable::new(
            vec![
                "Part Number".to_string(),
                "Serial".to_string(),
                "Quantity".to_string(),
                "Warehouse".to_string(),
                "Sub Inventory".to_string(),
            ],
            rows.iter()
                .map(|(part, serial, quantity)| {
                    vec![
                        part.clone(),
                        serial.clone().unwrap_or_default(),
                        quantity.to_string(),
                        "W1".to_string(),
                        "A".to_string(),
                    ]
                })
                .collect(),
        );
        let set = NonSerializedSet::from_items(&non_serialized);

        let untouched = InventoryDataset::validate(Side::Primary, &table, &index);
        let mut once = untouched.clone();
        once.suppress_serials(&set);
        let mut twice = once.clone();
        twice.suppress_serials(&set);

        prop_assert_eq!(once.rows(), twice.rows());

        // The override never removes or reorders rows, and rows outside
        // the set keep their serials.
        prop_assert_eq!(once.rows().len(), untouched.rows().len());
        for (before, after) in untouched.rows().iter().zip(once.rows()) {
            prop_assert_eq!(&before.part_number, &after.part_number);
            if set.contains(&before.part_number) {
                prop_assert_eq!(&after.serial, &None);
            } else {
                prop_assert_eq!(&after.serial, &before.serial);
            }
        }
    }
}
