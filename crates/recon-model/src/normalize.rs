//! Case-folding rules shared by validation and the comparison passes.
//!
//! Matching is case-insensitive with whitespace trimming; reported rows
//! always keep the original casing from the source table.

/// Serial key used for cross-side matching.
pub fn normalize_serial(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Part-number key used for quantity grouping.
pub fn normalize_part_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Part-number key used for non-serialized set membership.
pub fn normalize_item(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Treat empty or whitespace-only cells as absent.
pub fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
