//! Hospital source port definition.

use async_trait::async_trait;

use crate::domain::entities::Hospital;
use crate::domain::errors::CatalogError;

/// Port for loading the initial hospital list.
#[async_trait]
pub trait HospitalSourcePort: Send + Sync {
    /// Loads every hospital, in display order.
    async fn load_hospitals(&self) -> Result<Vec<Hospital>, CatalogError>;

    /// Short description used in logs.
    fn describe(&self) -> String;
}
