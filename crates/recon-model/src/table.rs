/// An already-parsed tabular source: one header row plus string cells.
///
/// This is the narrow interface the reconciliation core accepts from the
/// spreadsheet-reading collaborator. All cells arrive trimmed; schema and
/// value validation happen downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of a column by name, ignoring ASCII case and surrounding
    /// whitespace. First matching header wins.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(wanted))
    }

    /// The required columns absent from this table, in `required` order.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| (*name).to_string())
            .collect()
    }

    /// Cell value by row slice and column index; short rows read as empty.
    pub fn cell<'a>(row: &'a [String], index: usize) -> &'a str {
        row.get(index).map(String::as_str).unwrap_or("")
    }
}
