use serde::{Deserialize, Serialize};

use crate::Side;

/// A warehouse / sub-inventory pair in one side's naming scheme.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub warehouse: String,
    pub sub_inventory: String,
}

impl Location {
    pub fn new(warehouse: impl Into<String>, sub_inventory: impl Into<String>) -> Self {
        Self {
            warehouse: warehouse.into(),
            sub_inventory: sub_inventory.into(),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.warehouse, self.sub_inventory)
    }
}

/// One row of the conversion table: the same physical location named in
/// both schemes. Lookups are exact string equality on the queried side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRule {
    pub primary: Location,
    pub secondary: Location,
}

impl ConversionRule {
    /// The half of the rule belonging to `side`.
    pub fn half(&self, side: Side) -> &Location {
        match side {
            Side::Primary => &self.primary,
            Side::Secondary => &self.secondary,
        }
    }
}
