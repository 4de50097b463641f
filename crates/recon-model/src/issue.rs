use serde::{Deserialize, Serialize};

use crate::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fatal: the affected table takes no further part in processing.
    Error,
    /// Non-fatal: the row is excluded, processing continues.
    Warning,
}

/// A validation finding recorded while building an index or dataset.
///
/// Presentation order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
    pub severity: Severity,
}

impl ValidationError {
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn row(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyKind {
    /// Serial not found anywhere in the comparison target.
    MissingSerial,
    /// Serial found in the target, but not at the converted location.
    SerialLocationMismatch,
    /// Non-serialized part has no rows at the converted location.
    MissingItem,
    /// Aggregate quantities differ across the conversion mapping.
    QuantityMismatch,
}

/// One flagged row of the reconciliation output.
///
/// Same shape as an inventory row plus the issue text; appended to its
/// owning side's accumulator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
    pub part_number: String,
    pub serial: Option<String>,
    pub quantity: u64,
    pub location: Location,
    pub kind: DiscrepancyKind,
    pub issue: String,
}
