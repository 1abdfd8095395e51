//! Error types for vrcperf

use thiserror::Error;

/// Main error type for vrcperf operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Icon error: {0}")]
    Icon(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for vrcperf operations
pub type Result<T> = std::result::Result<T, Error>;
