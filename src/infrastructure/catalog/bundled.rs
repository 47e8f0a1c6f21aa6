//! Built-in hospital catalog.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::Hospital;
use crate::domain::errors::CatalogError;
use crate::domain::ports::HospitalSourcePort;

/// Sample hospitals shipped with the binary.
pub struct BundledCatalog {
    delay: Duration,
}

impl BundledCatalog {
    /// Creates catalog with simulated load latency.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Returns the bundled hospitals.
    #[must_use]
    pub fn hospitals() -> Vec<Hospital> {
        vec![
            Hospital::new(1_u32, "Riverside General Hospital")
                .with_location("12 Harbor Road, Riverside")
                .with_phone("+1 555 0101")
                .with_specialty("Emergency & Trauma"),
            Hospital::new(2_u32, "St. Catherine Medical Center")
                .with_location("400 Elm Street, Northgate")
                .with_phone("+1 555 0142")
                .with_specialty("Cardiology"),
            Hospital::new(3_u32, "Lakeside Children's Hospital")
                .with_location("9 Shore Drive, Lakeside")
                .with_phone("+1 555 0177")
                .with_specialty("Pediatrics"),
            Hospital::new(4_u32, "Hillcrest Orthopaedic Clinic")
                .with_location("77 Summit Avenue, Hillcrest")
                .with_phone("+1 555 0190")
                .with_specialty("Orthopaedics"),
            Hospital::new(5_u32, "Meadowbrook Cancer Institute")
                .with_location("1 Research Park, Meadowbrook")
                .with_phone("+1 555 0123")
                .with_specialty("Oncology"),
            Hospital::new(6_u32, "Old Town Community Hospital")
                .with_location("3 Market Square, Old Town")
                .with_specialty("General Practice"),
        ]
    }
}

#[async_trait]
impl HospitalSourcePort for BundledCatalog {
    async fn load_hospitals(&self) -> Result<Vec<Hospital>, CatalogError> {
        if !self.delay.is_zero() {
            debug!(delay_ms = self.delay.as_millis(), "Simulating catalog latency");
            tokio::time::sleep(self.delay).await;
        }
        Ok(Self::hospitals())
    }

    fn describe(&self) -> String {
        "bundled".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_ids_are_unique() {
        let hospitals = BundledCatalog::hospitals();
        let ids: HashSet<_> = hospitals.iter().map(Hospital::id).collect();
        assert_eq!(ids.len(), hospitals.len());
    }

    #[test]
    fn test_bundled_start_without_reactions() {
        assert!(BundledCatalog::hospitals().iter().all(|h| h.reacts() == 0));
    }

    #[tokio::test]
    async fn test_load_without_delay() {
        let catalog = BundledCatalog::new(Duration::ZERO);
        let hospitals = catalog.load_hospitals().await.unwrap();
        assert_eq!(hospitals.len(), 6);
    }
}
