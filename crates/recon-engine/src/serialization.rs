//! Part numbers declared non-serialized, and the override that clears
//! their serials before comparison.

use std::collections::BTreeSet;

use recon_model::normalize::normalize_item;
use recon_model::{RawTable, ValidationError};

/// Required columns of the serialization table, in schema order.
pub const SERIALIZATION_COLUMNS: [&str; 2] = ["Item", "Serialized?"];

/// Part numbers whose rows are compared by aggregate quantity rather than
/// serial identity. Membership keys are trimmed and uppercased.
#[derive(Debug, Clone, Default)]
pub struct NonSerializedSet {
    items: BTreeSet<String>,
}

impl NonSerializedSet {
    /// Build the set from the serialization table.
    ///
    /// A `Serialized?` value of `N` (case-insensitive) marks the item
    /// non-serialized; anything else leaves it serialized. A missing
    /// required column is fatal and yields an empty set.
    pub fn from_table(table: &RawTable) -> (Self, Vec<ValidationError>) {
        let mut errors = Vec::new();
        let missing = table.missing_columns(&SERIALIZATION_COLUMNS);
        if !missing.is_empty() {
            for column in missing {
                errors.push(ValidationError::fatal(format!("Missing field {column}")));
            }
            return (Self::default(), errors);
        }

        let item_idx = table
            .column_index(SERIALIZATION_COLUMNS[0])
            .unwrap_or_default();
        let flag_idx = table
            .column_index(SERIALIZATION_COLUMNS[1])
            .unwrap_or_default();

        let mut items = BTreeSet::new();
        for row in &table.rows {
            if !RawTable::cell(row, flag_idx).trim().eq_ignore_ascii_case("N") {
                continue;
            }
            let item = normalize_item(RawTable::cell(row, item_idx));
            if !item.is_empty() {
                items.insert(item);
            }
        }
        (Self { items }, errors)
    }

    /// Build the set directly from part numbers (normalized here).
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            items: items
                .into_iter()
                .map(|item| normalize_item(item.as_ref()))
                .filter(|item| !item.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, part_number: &str) -> bool {
        self.items.contains(&normalize_item(part_number))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialization_table(rows: Vec<(&str, &str)>) -> RawTable {
        RawTable::new(
            vec!["Item".to_string(), "Serialized?".to_string()],
            rows.into_iter()
                .map(|(item, flag)| vec![item.to_string(), flag.to_string()])
                .collect(),
        )
    }

    #[test]
    fn only_n_marks_non_serialized() {
        let (set, errors) = NonSerializedSet::from_table(&serialization_table(vec![
            ("PN100", "N"),
            ("PN200", "n"),
            ("PN300", "Y"),
            ("PN400", ""),
        ]));
        assert!(errors.is_empty());
        assert_eq!(set.len(), 2);
        assert!(set.contains("PN100"));
        assert!(set.contains("pn200"));
        assert!(!set.contains("PN300"));
    }

    #[test]
    fn membership_folds_case_and_whitespace() {
        let set = NonSerializedSet::from_items(["  pn100 "]);
        assert!(set.contains("PN100"));
        assert!(set.contains(" Pn100"));
    }

    #[test]
    fn missing_column_is_fatal_and_empty() {
        let table = RawTable::new(vec!["Item".to_string()], vec![vec!["PN100".to_string()]]);
        let (set, errors) = NonSerializedSet::from_table(&table);
        assert!(set.is_empty());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Missing field Serialized?");
        assert!(errors[0].is_fatal());
    }
}
