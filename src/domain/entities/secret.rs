//! Masked, zeroized secret text value object.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret text such as a password.
///
/// The value is wiped from memory on drop and never shows up in
/// `Debug` or `Display` output.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Secret {
    value: String,
}

impl Secret {
    /// Wraps the given text.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the raw text.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.value
    }

    /// Returns the number of characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Returns a fixed-width mask for display.
    #[must_use]
    pub fn masked(&self) -> String {
        "•".repeat(self.char_count())
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("len", &self.char_count())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_does_not_leak_secret() {
        let secret = Secret::new("hunter22");
        let debug_output = format!("{secret:?}");

        assert!(!debug_output.contains("hunter22"));
        assert!(debug_output.contains("len: 8"));
    }

    #[test]
    fn test_display_is_masked() {
        let secret = Secret::new("abc");
        assert_eq!(secret.to_string(), "•••");
    }

    #[test]
    fn test_char_count_is_unicode_aware() {
        let secret = Secret::new("päss");
        assert_eq!(secret.char_count(), 4);
        assert_eq!(secret.expose(), "päss");
    }
}
