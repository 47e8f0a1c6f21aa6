//! JSON file hospital catalog.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::Hospital;
use crate::domain::errors::CatalogError;
use crate::domain::ports::HospitalSourcePort;

/// Reads a JSON array of hospitals from disk. The file is never written.
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns catalog file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Result<Vec<Hospital>, CatalogError> {
        serde_json::from_str(content).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

#[async_trait]
impl HospitalSourcePort for JsonCatalog {
    async fn load_hospitals(&self) -> Result<Vec<Hospital>, CatalogError> {
        debug!(path = %self.path.display(), "Reading hospital catalog");

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;

        self.parse(&content)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_load_valid_file() {
        let file = catalog_file(
            r#"[
                {"id": 10, "name": "Bayview", "location": "Pier 4", "phone": "555-1"},
                {"id": 11, "name": "Summit", "specialty": "Neurology"}
            ]"#,
        );
        let catalog = JsonCatalog::new(file.path());

        let hospitals = tokio_test::block_on(catalog.load_hospitals()).unwrap();

        assert_eq!(hospitals.len(), 2);
        assert_eq!(hospitals[0].phone(), Some("555-1"));
        assert_eq!(hospitals[1].specialty(), Some("Neurology"));
    }

    #[test]
    fn test_malformed_file() {
        let file = catalog_file("{ not json");
        let catalog = JsonCatalog::new(file.path());

        let result = tokio_test::block_on(catalog.load_hospitals());

        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = JsonCatalog::new(dir.path().join("absent.json"));

        let err = catalog.load_hospitals().await.unwrap_err();

        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
