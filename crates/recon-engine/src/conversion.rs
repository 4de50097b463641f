//! Location-conversion table: loading, validation, and bidirectional lookup.

use recon_model::{ConversionRule, Location, RawTable, Side, ValidationError};

/// Required columns of the conversion table, in schema order.
pub const CONVERSION_COLUMNS: [&str; 4] = [
    "Primary Warehouse",
    "Primary Sub Inventory",
    "Secondary Warehouse",
    "Secondary Sub Inventory",
];

/// Validated conversion rules, shared read-only by both datasets.
///
/// Rules are stored sorted by primary warehouse (stable over input order)
/// so error ordering and lookup tie-breaks are reproducible.
#[derive(Debug, Clone, Default)]
pub struct ConversionIndex {
    rules: Vec<ConversionRule>,
    errors: Vec<ValidationError>,
}

impl ConversionIndex {
    /// Build the index from a raw conversion table.
    ///
    /// A missing required column is fatal: no rules are loaded. A row with
    /// any empty field records one error per empty field and is dropped;
    /// the remaining rows still load.
    pub fn from_table(table: &RawTable) -> Self {
        let mut errors = Vec::new();
        let missing = table.missing_columns(&CONVERSION_COLUMNS);
        if !missing.is_empty() {
            for column in missing {
                errors.push(ValidationError::fatal(format!("Missing field {column}")));
            }
            return Self {
                rules: Vec::new(),
                errors,
            };
        }

        let indices: Vec<usize> = CONVERSION_COLUMNS
            .iter()
            .filter_map(|column| table.column_index(column))
            .collect();
        debug_assert_eq!(indices.len(), CONVERSION_COLUMNS.len());

        let mut ordered: Vec<&Vec<String>> = table.rows.iter().collect();
        ordered.sort_by(|a, b| RawTable::cell(a, indices[0]).cmp(RawTable::cell(b, indices[0])));

        let mut rules = Vec::new();
        for (number, row) in ordered.iter().enumerate() {
            let number = number + 1;
            let mut complete = true;
            for (position, column) in CONVERSION_COLUMNS.iter().enumerate() {
                if RawTable::cell(row, indices[position]).trim().is_empty() {
                    errors.push(ValidationError::row(format!(
                        "'{column}' is empty. failed at row {number}"
                    )));
                    complete = false;
                }
            }
            if !complete {
                continue;
            }
            rules.push(ConversionRule {
                primary: Location::new(
                    RawTable::cell(row, indices[0]),
                    RawTable::cell(row, indices[1]),
                ),
                secondary: Location::new(
                    RawTable::cell(row, indices[2]),
                    RawTable::cell(row, indices[3]),
                ),
            });
        }

        Self { rules, errors }
    }

    /// Translate a location to the opposite side's naming scheme.
    ///
    /// Matching is exact string equality on `side`'s warehouse and
    /// sub-inventory; the first stored rule wins when several match.
    /// `None` is a normal outcome: not every location pair has a mapping,
    /// and callers treat a miss as "skip", never as a failure.
    pub fn find_conversion(
        &self,
        side: Side,
        warehouse: &str,
        sub_inventory: &str,
    ) -> Option<&Location> {
        self.rules
            .iter()
            .find(|rule| {
                let own = rule.half(side);
                own.warehouse == warehouse && own.sub_inventory == sub_inventory
            })
            .map(|rule| rule.half(side.opposite()))
    }

    pub fn rules(&self) -> &[ConversionRule] {
        &self.rules
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// False only when the table schema itself was unusable.
    pub fn is_valid(&self) -> bool {
        !self.errors.iter().any(ValidationError::is_fatal)
    }
}
