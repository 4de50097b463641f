//! Full reconciliation run: override, four comparison passes, report.

use tracing::{debug, info};

use recon_model::{ReconError, Result, Side};

use crate::{
    ConversionIndex, DiscrepancyReport, InventoryDataset, NonSerializedSet, quantity, serial,
};

/// Everything a reconciliation run produces: both datasets with their
/// accumulated errors and discrepancies, plus the assembled report.
#[derive(Debug)]
pub struct ReconOutcome {
    pub primary: InventoryDataset,
    pub secondary: InventoryDataset,
    pub report: DiscrepancyReport,
}

/// Run the four comparison passes in the fixed order and assemble the
/// report.
///
/// The serialization override is applied to both working copies first.
/// Fatal validation errors must have halted the pipeline before this
/// point; an invalid index or dataset is rejected here rather than
/// compared partially.
pub fn reconcile(
    mut primary: InventoryDataset,
    mut secondary: InventoryDataset,
    index: &ConversionIndex,
    non_serialized: &NonSerializedSet,
) -> Result<ReconOutcome> {
    if !index.is_valid() {
        return Err(ReconError::InvalidConversionTable);
    }
    if !primary.is_valid() {
        return Err(ReconError::InvalidDataset {
            side: Side::Primary,
        });
    }
    if !secondary.is_valid() {
        return Err(ReconError::InvalidDataset {
            side: Side::Secondary,
        });
    }

    if !non_serialized.is_empty() {
        debug!(items = non_serialized.len(), "suppressing serials for non-serialized items");
    }
    primary.suppress_serials(non_serialized);
    secondary.suppress_serials(non_serialized);

    info!("checking Primary worksheet by serial");
    let found = serial::check_serials(&primary, &secondary, index);
    primary.record_discrepancies(found);

    info!("checking Secondary worksheet by serial");
    let found = serial::check_serials(&secondary, &primary, index);
    secondary.record_discrepancies(found);

    info!("checking Primary worksheet by quantity");
    let found = quantity::check_quantities(&primary, &secondary, index);
    primary.record_discrepancies(found);

    info!("checking Secondary worksheet by quantity");
    let found = quantity::check_quantities(&secondary, &primary, index);
    secondary.record_discrepancies(found);

    let report = DiscrepancyReport::assemble(&primary, &secondary);
    info!(discrepancies = report.total(), "reconciliation complete");

    Ok(ReconOutcome {
        primary,
        secondary,
        report,
    })
}
