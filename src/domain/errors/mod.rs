//! Domain error types.

mod catalog_error;
mod context_error;
mod validation_error;

pub use catalog_error::CatalogError;
pub use context_error::ContextError;
pub use validation_error::ValidationError;
