//! Per-field validation error map.

use std::collections::BTreeMap;
use std::fmt::Debug;

/// A field of a form that can carry a validation error.
pub trait FormField: Copy + Ord + Debug + Send + Sync + 'static {
    /// Every field of the form, in display order.
    const ALL: &'static [Self];

    /// Human readable label.
    fn label(self) -> &'static str;
}

/// Validation errors keyed by form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: FormField> {
    errors: BTreeMap<F, String>,
}

impl<F: FormField> FieldErrors<F> {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records an error for a field, replacing any previous one.
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Removes the error for a single field.
    ///
    /// Returns whether an error was present.
    pub fn clear(&mut self, field: F) -> bool {
        self.errors.remove(&field).is_some()
    }

    /// Returns the error message for a field.
    #[must_use]
    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Returns whether a field has an error.
    #[must_use]
    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    /// Returns whether no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Returns the fields that currently carry an error.
    #[must_use]
    pub fn fields(&self) -> Vec<F> {
        self.errors.keys().copied().collect()
    }
}

impl<F: FormField> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}
