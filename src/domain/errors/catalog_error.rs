//! Hospital catalog error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the hospital catalog.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate hospital id {id} in catalog")]
    DuplicateId { id: u32 },

    #[error("catalog load task failed: {message}")]
    TaskFailed { message: String },
}

impl CatalogError {
    /// Creates task failure error.
    #[must_use]
    pub fn task_failed(message: impl Into<String>) -> Self {
        Self::TaskFailed {
            message: message.into(),
        }
    }
}
