//! Login form and its validation rules.

use super::{FieldErrors, FormField};
use crate::domain::entities::Secret;

/// Fields of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    /// Username input.
    Username,
    /// Password input.
    Password,
}

impl FormField for LoginField {
    const ALL: &'static [Self] = &[Self::Username, Self::Password];

    fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
        }
    }
}

/// Transient login credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Username as typed.
    pub username: String,
    /// Password as typed.
    pub password: Secret,
}

impl LoginForm {
    /// Shown under a blank username.
    pub const USERNAME_REQUIRED: &'static str = "Username is required.";
    /// Shown under a blank password.
    pub const PASSWORD_REQUIRED: &'static str = "Password is required.";

    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<Secret>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Checks that both fields are non-blank.
    #[must_use]
    pub fn validate(&self) -> FieldErrors<LoginField> {
        let mut errors = FieldErrors::new();

        if self.username.trim().is_empty() {
            errors.insert(LoginField::Username, Self::USERNAME_REQUIRED);
        }
        if self.password.expose().trim().is_empty() {
            errors.insert(LoginField::Password, Self::PASSWORD_REQUIRED);
        }

        errors
    }
}
