//! Hospital loading use case.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::application::context::ContextUpdate;
use crate::domain::entities::Hospital;
use crate::domain::errors::CatalogError;
use crate::domain::ports::HospitalSourcePort;

/// Loads the initial hospital list from a source.
#[derive(Clone)]
pub struct LoadHospitalsUseCase {
    source: Arc<dyn HospitalSourcePort>,
}

impl LoadHospitalsUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(source: Arc<dyn HospitalSourcePort>) -> Self {
        Self { source }
    }

    /// Loads and checks the hospital list.
    ///
    /// # Errors
    /// Returns error if the source fails or yields duplicate IDs.
    pub async fn execute(&self) -> Result<Vec<Hospital>, CatalogError> {
        debug!(source = %self.source.describe(), "Loading hospitals");

        let hospitals = self.source.load_hospitals().await?;

        let mut seen = HashSet::with_capacity(hospitals.len());
        for hospital in &hospitals {
            if !seen.insert(hospital.id()) {
                return Err(CatalogError::DuplicateId {
                    id: hospital.id().as_u32(),
                });
            }
        }

        info!(count = hospitals.len(), source = %self.source.describe(), "Hospital catalog ready");
        Ok(hospitals)
    }

    /// Runs the load on a background task and reports back as a context update.
    pub fn spawn(&self, tx: mpsc::UnboundedSender<ContextUpdate>) -> JoinHandle<()> {
        let use_case = self.clone();
        tokio::spawn(async move {
            let update = match use_case.execute().await {
                Ok(hospitals) => ContextUpdate::Loaded(hospitals),
                Err(e) => {
                    error!(error = %e, "Failed to load hospitals");
                    ContextUpdate::LoadFailed(e.to_string())
                }
            };
            let _ = tx.send(update);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockHospitalSource;

    #[tokio::test]
    async fn test_execute_returns_source_order() {
        let source = Arc::new(MockHospitalSource::new(vec![
            Hospital::new(2_u32, "B"),
            Hospital::new(1_u32, "A"),
        ]));
        let use_case = LoadHospitalsUseCase::new(source.clone());

        let hospitals = use_case.execute().await.unwrap();

        assert_eq!(hospitals[0].name(), "B");
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_ids_rejected() {
        let source = Arc::new(MockHospitalSource::new(vec![
            Hospital::new(1_u32, "A"),
            Hospital::new(1_u32, "A again"),
        ]));
        let use_case = LoadHospitalsUseCase::new(source);

        let result = use_case.execute().await;

        assert!(matches!(result, Err(CatalogError::DuplicateId { id: 1 })));
    }

    #[tokio::test]
    async fn test_spawn_sends_loaded_update() {
        let source = Arc::new(MockHospitalSource::new(vec![Hospital::new(1_u32, "A")]));
        let (tx, mut rx) = mpsc::unbounded_channel();

        LoadHospitalsUseCase::new(source).spawn(tx).await.unwrap();

        match rx.recv().await {
            Some(ContextUpdate::Loaded(hospitals)) => assert_eq!(hospitals.len(), 1),
            other => panic!("unexpected update: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_spawn_sends_failure_update() {
        let source = Arc::new(MockHospitalSource::failing());
        let (tx, mut rx) = mpsc::unbounded_channel();

        LoadHospitalsUseCase::new(source).spawn(tx).await.unwrap();

        assert!(matches!(
            rx.recv().await,
            Some(ContextUpdate::LoadFailed(_))
        ));
    }
}
