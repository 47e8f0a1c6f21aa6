//! Hospital entity.

use serde::{Deserialize, Serialize};

/// Unique identifier for a hospital record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HospitalId(pub u32);

impl HospitalId {
    /// Returns the underlying value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for HospitalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for HospitalId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A hospital shown as a card in the list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hospital {
    id: HospitalId,
    name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    specialty: Option<String>,
    #[serde(default)]
    reacts: u64,
}

impl Hospital {
    /// Creates a new hospital with the given ID and name.
    #[must_use]
    pub fn new(id: impl Into<HospitalId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: String::new(),
            phone: None,
            specialty: None,
            reacts: 0,
        }
    }

    /// Sets the location line.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the contact phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the specialty.
    #[must_use]
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    /// Returns hospital ID.
    #[must_use]
    pub const fn id(&self) -> HospitalId {
        self.id
    }

    /// Returns display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns location, empty when unknown.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns phone number.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns specialty.
    #[must_use]
    pub fn specialty(&self) -> Option<&str> {
        self.specialty.as_deref()
    }

    /// Returns how many times this card was reacted to.
    #[must_use]
    pub const fn reacts(&self) -> u64 {
        self.reacts
    }

    /// Returns whether this card was reacted to at least once.
    #[must_use]
    pub const fn is_reacted(&self) -> bool {
        self.reacts > 0
    }

    pub(crate) const fn record_react(&mut self) {
        self.reacts = self.reacts.saturating_add(1);
    }
}
