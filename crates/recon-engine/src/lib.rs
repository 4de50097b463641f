//! Reconciliation engine for two inventory worksheets recorded in
//! different location-naming schemes.
//!
//! The engine runs in stages: the [`ConversionIndex`] is built first,
//! each side's [`InventoryDataset`] is validated against it, the
//! serialization override clears serials for non-serialized items, and
//! the serial and quantity passes each run once per direction. The
//! [`DiscrepancyReport`] concatenates all four passes' findings.

pub mod conversion;
pub mod dataset;
pub mod quantity;
pub mod reconcile;
pub mod report;
pub mod serial;
pub mod serialization;

pub use conversion::{CONVERSION_COLUMNS, ConversionIndex};
pub use dataset::{DEFAULT_SORT_COLUMN, INVENTORY_COLUMNS, InventoryDataset};
pub use reconcile::{ReconOutcome, reconcile};
pub use report::{DiscrepancyReport, REPORT_COLUMNS};
pub use serialization::{NonSerializedSet, SERIALIZATION_COLUMNS};
