//! Error types for scene I/O

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing scene files
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Scene file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("No scene format for extension '{extension}' (expected {expected})")]
    UnsupportedExtension {
        extension: String,
        expected: &'static str,
    },

    #[error("Malformed OBJ data: {0}")]
    Obj(String),

    #[error("Malformed scene document: {0}")]
    Document(#[source] serde_json::Error),

    #[error("Failed to encode scene document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Map a failed open to [`IoError::NotFound`] when the file is missing
    pub(crate) fn open(path: &std::path::Path, e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => IoError::NotFound {
                path: path.to_path_buf(),
            },
            _ => IoError::Io(e),
        }
    }
}

impl From<IoError> for vrcperf_core::Error {
    fn from(e: IoError) -> Self {
        match e {
            IoError::Io(e) => vrcperf_core::Error::Io(e),
            IoError::UnsupportedExtension { .. } => {
                vrcperf_core::Error::UnsupportedFormat(e.to_string())
            }
            IoError::NotFound { .. } | IoError::Obj(_) | IoError::Document(_) => {
                vrcperf_core::Error::InvalidData(e.to_string())
            }
            IoError::Encode(_) => vrcperf_core::Error::Serialization(e.to_string()),
        }
    }
}
