//! Login use case implementation.

use tracing::{debug, info};

use crate::application::dto::{LoginRequest, LoginResponse};
use crate::domain::errors::ValidationError;
use crate::domain::forms::LoginField;

/// Validates entered credentials.
///
/// Presentation-only check: nothing is verified against a backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginUseCase;

impl LoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes login with provided request.
    ///
    /// # Errors
    /// Returns the per-field errors if username or password is blank.
    pub fn execute(
        &self,
        request: LoginRequest,
    ) -> Result<LoginResponse, ValidationError<LoginField>> {
        debug!("Validating login form");

        let errors = request.form.validate();
        if !errors.is_empty() {
            debug!(fields = ?errors.fields(), "Login rejected");
            return Err(ValidationError::new(errors));
        }

        let LoginRequest { form } = request;
        info!(username = %form.username, "Login accepted");

        Ok(LoginResponse {
            username: form.username,
        })
    }
}
