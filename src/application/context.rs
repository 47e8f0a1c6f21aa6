//! Shared hospital context.
//!
//! Single owner of the hospital list, the loading flag and the global
//! reaction counter. Screens read snapshots through the accessors; every
//! mutation goes through [`HospitalContext::apply`].

use tracing::{debug, info, warn};

use crate::domain::entities::Hospital;
use crate::domain::errors::ContextError;

/// A mutation of the hospital context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextUpdate {
    /// Initial load finished.
    Loaded(Vec<Hospital>),
    /// Initial load failed; the list stays empty.
    LoadFailed(String),
    /// React to the hospital at the given position.
    React(usize),
}

/// Application-wide hospital state.
#[derive(Debug, Clone)]
pub struct HospitalContext {
    hospitals: Vec<Hospital>,
    is_loading: bool,
    total_reacts: u64,
    load_error: Option<String>,
}

impl HospitalContext {
    /// Creates a context waiting for its initial load.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hospitals: Vec::new(),
            is_loading: true,
            total_reacts: 0,
            load_error: None,
        }
    }

    /// Creates a context that is already loaded.
    #[must_use]
    pub fn with_hospitals(hospitals: Vec<Hospital>) -> Self {
        let mut context = Self::new();
        context.set_loaded(hospitals);
        context
    }

    /// Returns the current hospital list.
    #[must_use]
    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    /// Returns whether the initial load is still running.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Returns the global reaction counter.
    #[must_use]
    pub const fn total_reacts(&self) -> u64 {
        self.total_reacts
    }

    /// Returns the error from the initial load, if it failed.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Applies a single update.
    ///
    /// # Errors
    /// Returns error if a reaction targets a missing hospital or arrives
    /// before the list is loaded. The context is left unchanged.
    pub fn apply(&mut self, update: ContextUpdate) -> Result<(), ContextError> {
        match update {
            ContextUpdate::Loaded(hospitals) => {
                self.set_loaded(hospitals);
                Ok(())
            }
            ContextUpdate::LoadFailed(message) => {
                warn!(error = %message, "Hospital load failed");
                self.hospitals.clear();
                self.is_loading = false;
                self.load_error = Some(message);
                Ok(())
            }
            ContextUpdate::React(index) => self.react(index),
        }
    }

    /// Records a reaction on the hospital at `index`.
    ///
    /// Bumps that hospital's count and the global counter by exactly one.
    ///
    /// # Errors
    /// See [`HospitalContext::apply`].
    pub fn toggle_react(&mut self, index: usize) -> Result<(), ContextError> {
        self.apply(ContextUpdate::React(index))
    }

    fn set_loaded(&mut self, hospitals: Vec<Hospital>) {
        info!(count = hospitals.len(), "Hospitals loaded");
        self.total_reacts = hospitals
            .iter()
            .map(Hospital::reacts)
            .fold(0, u64::saturating_add);
        self.hospitals = hospitals;
        self.is_loading = false;
        self.load_error = None;
    }

    fn react(&mut self, index: usize) -> Result<(), ContextError> {
        if self.is_loading {
            return Err(ContextError::StillLoading);
        }

        let len = self.hospitals.len();
        let hospital = self
            .hospitals
            .get_mut(index)
            .ok_or(ContextError::IndexOutOfRange { index, len })?;

        hospital.record_react();
        self.total_reacts = self.total_reacts.saturating_add(1);

        debug!(
            hospital_id = %hospital.id(),
            reacts = hospital.reacts(),
            total = self.total_reacts,
            "Reaction recorded"
        );
        Ok(())
    }
}

impl Default for HospitalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Hospital> {
        vec![
            Hospital::new(1_u32, "North"),
            Hospital::new(2_u32, "South"),
            Hospital::new(3_u32, "East"),
        ]
    }

    #[test]
    fn test_initial_state_is_loading() {
        let context = HospitalContext::new();
        assert!(context.is_loading());
        assert!(context.hospitals().is_empty());
        assert_eq!(context.total_reacts(), 0);
    }

    #[test]
    fn test_loaded_update() {
        let mut context = HospitalContext::new();
        context.apply(ContextUpdate::Loaded(sample())).unwrap();

        assert!(!context.is_loading());
        assert_eq!(context.hospitals().len(), 3);
        assert!(context.load_error().is_none());
    }

    #[test]
    fn test_react_increments_by_one_and_touches_only_target() {
        let mut context = HospitalContext::with_hospitals(sample());
        let before = context.hospitals().to_vec();

        context.toggle_react(1).unwrap();

        assert_eq!(context.total_reacts(), 1);
        assert_eq!(context.hospitals()[1].reacts(), 1);
        assert_eq!(context.hospitals()[0], before[0]);
        assert_eq!(context.hospitals()[2], before[2]);
    }

    #[test]
    fn test_repeated_react_never_decrements() {
        let mut context = HospitalContext::with_hospitals(sample());

        for expected in 1..=4 {
            context.toggle_react(0).unwrap();
            assert_eq!(context.total_reacts(), expected);
        }
        assert_eq!(context.hospitals()[0].reacts(), 4);
    }

    #[test]
    fn test_react_out_of_range_leaves_state_unchanged() {
        let mut context = HospitalContext::with_hospitals(sample());

        let result = context.toggle_react(3);

        assert_eq!(
            result,
            Err(ContextError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(context.total_reacts(), 0);
    }

    #[test]
    fn test_react_while_loading() {
        let mut context = HospitalContext::new();
        assert_eq!(context.toggle_react(0), Err(ContextError::StillLoading));
    }

    #[test]
    fn test_load_failed() {
        let mut context = HospitalContext::new();
        context
            .apply(ContextUpdate::LoadFailed("disk on fire".to_string()))
            .unwrap();

        assert!(!context.is_loading());
        assert!(context.hospitals().is_empty());
        assert_eq!(context.load_error(), Some("disk on fire"));
    }

    #[test]
    fn test_total_seeded_from_catalog_counts() {
        let mut reacted = Hospital::new(9_u32, "West");
        reacted.record_react();
        let context = HospitalContext::with_hospitals(vec![reacted]);

        assert_eq!(context.total_reacts(), 1);
    }

    #[test]
    fn test_total_saturates_on_huge_catalog_counts() {
        let hospitals: Vec<Hospital> = serde_json::from_str(
            r#"[{"id":1,"name":"A","reacts":18446744073709551615},{"id":2,"name":"B","reacts":1}]"#,
        )
        .unwrap();

        let mut context = HospitalContext::with_hospitals(hospitals);
        assert_eq!(context.total_reacts(), u64::MAX);

        context.toggle_react(1).unwrap();
        assert_eq!(context.total_reacts(), u64::MAX);
    }
}
