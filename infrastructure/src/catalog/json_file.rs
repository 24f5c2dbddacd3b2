//! Catalog source backed by a local JSON file

use super::wire::parse_catalog;
use async_trait::async_trait;
use iqtest_application::{CatalogError, CatalogSource};
use iqtest_domain::QuestionCatalog;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalogSource {
    async fn load(&self) -> Result<QuestionCatalog, CatalogError> {
        debug!("Reading question catalog from {}", self.path.display());
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Unavailable(format!("{}: {}", self.path.display(), e)))?;
        parse_catalog(&json)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqtest_domain::CognitiveDomain;

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(
            &path,
            r#"{"Processing Speed": {"easy": [{"id": "ps1", "correct": 0}]}}"#,
        )
        .unwrap();

        let catalog = JsonFileCatalogSource::new(&path).load().await.unwrap();
        assert_eq!(catalog.domain_len(CognitiveDomain::ProcessingSpeed), 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileCatalogSource::new(dir.path().join("absent.json"));
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
        assert!(source.describe().ends_with("absent.json"));
    }
}
