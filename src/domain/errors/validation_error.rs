//! Form rejection error.

use thiserror::Error;

use crate::domain::forms::{FieldErrors, FormField};

/// A form submission was rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("form rejected: {} invalid field(s)", .errors.len())]
pub struct ValidationError<F: FormField> {
    errors: FieldErrors<F>,
}

impl<F: FormField> ValidationError<F> {
    /// Wraps a non-empty error set.
    #[must_use]
    pub const fn new(errors: FieldErrors<F>) -> Self {
        Self { errors }
    }

    /// Returns the per-field errors.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors<F> {
        &self.errors
    }

    /// Consumes the error and returns the per-field errors.
    #[must_use]
    pub fn into_errors(self) -> FieldErrors<F> {
        self.errors
    }
}
