//! Registration use case implementation.

use tracing::{debug, info};

use crate::application::dto::{RegistrationRequest, RegistrationResponse};
use crate::domain::errors::ValidationError;
use crate::domain::forms::RegistrationField;

/// Validates a registration form.
///
/// There is no account backend; an accepted form is simply dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterUseCase;

impl RegisterUseCase {
    /// Creates new registration use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes registration with provided request.
    ///
    /// # Errors
    /// Returns every failing field at once.
    pub fn execute(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationResponse, ValidationError<RegistrationField>> {
        debug!("Validating registration form");

        let errors = request.form.validate();
        if !errors.is_empty() {
            debug!(fields = ?errors.fields(), "Registration rejected");
            return Err(ValidationError::new(errors));
        }

        let name = request.form.name.trim().to_string();
        info!(name = %name, "Registration accepted");

        Ok(RegistrationResponse { name })
    }
}
