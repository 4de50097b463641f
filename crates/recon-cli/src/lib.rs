//! Shared infrastructure for the stock reconciliation CLI.

pub mod logging;
