//! Selection errors reported instead of statistics

use thiserror::Error;
use vrcperf_core::{CollectionId, ObjectId};

/// Why a selection cannot be measured
///
/// These are shown to the user as panel text, never raised to the host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("nothing selected")]
    NothingSelected,

    #[error("unsupported selection: {0}")]
    UnsupportedSelection(String),

    #[error("unknown {0}")]
    UnknownObject(ObjectId),

    #[error("unknown {0}")]
    UnknownCollection(CollectionId),
}

impl SelectionError {
    /// Text shown in the panel in place of the statistics
    pub fn user_message(&self) -> String {
        match self {
            SelectionError::NothingSelected => "Nothing selected.".to_string(),
            SelectionError::UnsupportedSelection(reason) => {
                format!("Unsupported selection: {}.", reason)
            }
            SelectionError::UnknownObject(_) | SelectionError::UnknownCollection(_) => {
                "Selection is no longer part of the scene.".to_string()
            }
        }
    }

    pub(crate) fn unsupported<S: Into<String>>(reason: S) -> Self {
        SelectionError::UnsupportedSelection(reason.into())
    }
}

/// Result type alias for selection handling
pub type SelectionResult<T> = std::result::Result<T, SelectionError>;
