//! Form models and their validation rules.

mod field_errors;
mod login_form;
mod registration_form;

pub use field_errors::{FieldErrors, FormField};
pub use login_form::{LoginField, LoginForm};
pub use registration_form::{
    MIN_PASSWORD_LEN, RegistrationField, RegistrationForm, is_valid_email,
};
