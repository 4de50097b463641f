use thiserror::Error;

use crate::Side;

#[derive(Debug, Error)]
pub enum ReconError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("conversion table failed validation")]
    InvalidConversionTable,
    #[error("{side} inventory failed validation")]
    InvalidDataset { side: Side },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ReconError>;
