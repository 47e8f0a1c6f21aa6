//! Hospital catalog adapters.

mod bundled;
mod json_file;

use std::sync::Arc;

pub use bundled::BundledCatalog;
pub use json_file::JsonCatalog;

use crate::domain::ports::HospitalSourcePort;
use crate::infrastructure::config::CatalogConfig;

/// Picks the catalog adapter for the given configuration.
#[must_use]
pub fn source_from_config(config: &CatalogConfig) -> Arc<dyn HospitalSourcePort> {
    match &config.path {
        Some(path) => Arc::new(JsonCatalog::new(path.clone())),
        None => Arc::new(BundledCatalog::new(config.load_delay())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_source_selection() {
        let bundled = source_from_config(&CatalogConfig::default());
        assert_eq!(bundled.describe(), "bundled");

        let config = CatalogConfig {
            path: Some(PathBuf::from("/data/h.json")),
            load_delay_ms: 0,
        };
        assert_eq!(source_from_config(&config).describe(), "file /data/h.json");
    }
}
