use serde::{Deserialize, Serialize};

/// Which of the two inventory worksheets a value belongs to.
///
/// Every conversion rule has a primary half and a secondary half; every
/// dataset, row, and discrepancy is owned by exactly one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Primary,
    Secondary,
}

impl Side {
    /// The side a comparison pass checks against.
    pub fn opposite(self) -> Self {
        match self {
            Side::Primary => Side::Secondary,
            Side::Secondary => Side::Primary,
        }
    }

    /// Worksheet label as it appears in issue messages.
    pub fn label(self) -> &'static str {
        match self {
            Side::Primary => "Primary",
            Side::Secondary => "Secondary",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
