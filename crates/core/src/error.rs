//! Error types for specindex

use crate::cube::Band;
use thiserror::Error;

/// Main error type for specindex operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing band: {band} is mapped to index {index}, but the cube has {bands} bands")]
    MissingBand { band: Band, index: usize, bands: usize },

    #[error("Insufficient bands: band map requires {required}, cube has {available}")]
    InsufficientBands { required: usize, available: usize },

    #[error("Invalid cube dimensions: {rows}x{cols}x{bands}")]
    InvalidDimensions { rows: usize, cols: usize, bands: usize },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Band map configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

/// Result type alias for specindex operations
pub type Result<T> = std::result::Result<T, Error>;
