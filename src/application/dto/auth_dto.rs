//! Form submission DTOs.

use crate::domain::forms::{LoginForm, RegistrationForm};

/// Login request data.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Entered credentials.
    pub form: LoginForm,
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub const fn new(form: LoginForm) -> Self {
        Self { form }
    }
}

/// Accepted login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    /// Username exactly as entered, forwarded to the list screen.
    pub username: String,
}

/// Registration request data.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Entered registration details.
    pub form: RegistrationForm,
}

impl RegistrationRequest {
    /// Creates new registration request.
    #[must_use]
    pub const fn new(form: RegistrationForm) -> Self {
        Self { form }
    }
}

/// Accepted registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationResponse {
    /// Name of the registered person.
    pub name: String,
}
