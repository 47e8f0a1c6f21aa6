//! Domain layer with entities, form rules and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Form models and validation.
pub mod forms;
/// Port definitions.
pub mod ports;

pub use entities::{Hospital, HospitalId, Secret};
pub use errors::{CatalogError, ContextError, ValidationError};
pub use forms::{FieldErrors, FormField, LoginField, LoginForm, RegistrationField, RegistrationForm};
pub use ports::HospitalSourcePort;
