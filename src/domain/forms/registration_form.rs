//! Registration form and its validation rules.

use std::sync::LazyLock;

use regex::Regex;

use super::{FieldErrors, FormField};
use crate::domain::entities::Secret;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrationField {
    /// Full name input.
    Name,
    /// Email input.
    Email,
    /// Password input.
    Password,
    /// Password confirmation input.
    ConfirmPassword,
}

impl FormField for RegistrationField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }
}

/// Returns whether `email` has the minimal `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Transient registration form data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Chosen password.
    pub password: Secret,
    /// Password typed a second time.
    pub confirm_password: Secret,
}

impl RegistrationForm {
    /// Shown under a blank name.
    pub const NAME_EMPTY: &'static str = "Name cannot be empty.";
    /// Shown under a malformed email.
    pub const EMAIL_INVALID: &'static str = "Please enter a valid email address.";
    /// Shown under a short password.
    pub const PASSWORD_TOO_SHORT: &'static str = "Password must be at least 6 characters long.";
    /// Shown under a mismatched confirmation.
    pub const PASSWORDS_DIFFER: &'static str = "Passwords do not match.";

    /// Runs every rule; a failing rule never hides another.
    #[must_use]
    pub fn validate(&self) -> FieldErrors<RegistrationField> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(RegistrationField::Name, Self::NAME_EMPTY);
        }
        if !is_valid_email(&self.email) {
            errors.insert(RegistrationField::Email, Self::EMAIL_INVALID);
        }
        if self.password.char_count() < MIN_PASSWORD_LEN {
            errors.insert(RegistrationField::Password, Self::PASSWORD_TOO_SHORT);
        }
        if self.password.expose() != self.confirm_password.expose() {
            errors.insert(RegistrationField::ConfirmPassword, Self::PASSWORDS_DIFFER);
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn form(name: &str, email: &str, password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            name: name.to_string(),
            email: email.to_string(),
            password: Secret::new(password),
            confirm_password: Secret::new(confirm),
        }
    }

    #[test_case("user@example.com", true ; "plain")]
    #[test_case("a.b+c@mail.co.uk", true ; "subdomain")]
    #[test_case("userexample.com", false ; "missing_at")]
    #[test_case("user@example", false ; "missing_dot_after_at")]
    #[test_case("us er@example.com", false ; "space_in_local")]
    #[test_case("user@@example.com", false ; "double_at")]
    #[test_case("@example.com", false ; "empty_local")]
    #[test_case("user@.com", false ; "empty_domain")]
    #[test_case("user@example.", false ; "empty_tld")]
    #[test_case("", false ; "empty")]
    fn test_email_shape(email: &str, valid: bool) {
        assert_eq!(is_valid_email(email), valid);
    }

    #[test]
    fn test_example_from_registration_screen() {
        let errors = form("", "a@b", "abc", "abc").validate();

        assert!(errors.contains(RegistrationField::Name));
        assert!(errors.contains(RegistrationField::Email));
        assert!(errors.contains(RegistrationField::Password));
        assert!(!errors.contains(RegistrationField::ConfirmPassword));
    }

    #[test]
    fn test_mismatch_flagged_even_when_both_valid() {
        let errors = form("Ann", "ann@example.com", "longenough", "longenougH").validate();

        assert_eq!(errors.fields(), vec![RegistrationField::ConfirmPassword]);
        assert_eq!(
            errors.get(RegistrationField::ConfirmPassword),
            Some(RegistrationForm::PASSWORDS_DIFFER)
        );
    }

    #[test]
    fn test_confirm_is_not_trimmed() {
        let errors = form("Ann", "ann@example.com", "secret1", "secret1 ").validate();
        assert!(errors.contains(RegistrationField::ConfirmPassword));
    }

    #[test_case("12345", true ; "five_chars")]
    #[test_case("123456", false ; "six_chars")]
    #[test_case("ééééé", true ; "five_multibyte_chars")]
    #[test_case("éééééé", false ; "six_multibyte_chars")]
    #[test_case("😀😀😀", true ; "three_emoji_are_three_chars")]
    fn test_password_length(password: &str, flagged: bool) {
        let errors = form("Ann", "ann@example.com", password, password).validate();
        assert_eq!(errors.contains(RegistrationField::Password), flagged);
    }

    #[test]
    fn test_valid_form() {
        let errors = form("Ann", "ann@example.com", "secret1", "secret1").validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let errors = form("   ", "ann@example.com", "secret1", "secret1").validate();
        assert_eq!(errors.get(RegistrationField::Name), Some(RegistrationForm::NAME_EMPTY));
    }
}
