pub mod error;
pub mod issue;
pub mod location;
pub mod normalize;
pub mod row;
pub mod side;
pub mod table;

pub use error::{ReconError, Result};
pub use issue::{Discrepancy, DiscrepancyKind, Severity, ValidationError};
pub use location::{ConversionRule, Location};
pub use row::InventoryRow;
pub use side::Side;
pub use table::RawTable;
