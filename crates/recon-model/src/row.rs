use serde::{Deserialize, Serialize};

use crate::Location;

/// A validated inventory row.
///
/// Quantity is parsed once at validation time; comparison passes never
/// re-parse raw cells. An absent serial means the row is compared by
/// aggregated quantity instead of serial identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub part_number: String,
    pub serial: Option<String>,
    pub quantity: u32,
    pub location: Location,
}

impl InventoryRow {
    pub fn is_serialized(&self) -> bool {
        self.serial.is_some()
    }
}
