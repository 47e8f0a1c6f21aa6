//! Hospital context error types.

use thiserror::Error;

/// Errors raised when updating the shared hospital context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ContextError {
    #[error("hospital index {index} out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("hospitals are still loading")]
    StillLoading,
}
