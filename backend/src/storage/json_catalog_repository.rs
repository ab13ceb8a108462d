use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use shared::SurgeryDefinition;

use crate::domain::models::SurgeryCatalog;
use crate::storage::traits::SurgeryCatalogStorage;

/// Surgery catalog stored as a JSON array of `{surgeryType, steps}` objects
#[derive(Debug, Clone)]
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse_catalog(json: &str) -> Result<SurgeryCatalog> {
        let entries: Vec<SurgeryDefinition> =
            serde_json::from_str(json).context("Failed to parse surgery catalog JSON")?;
        Ok(SurgeryCatalog::new(entries)?)
    }
}

impl SurgeryCatalogStorage for JsonCatalogRepository {
    fn load_catalog(&self) -> Result<SurgeryCatalog> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read surgery catalog file: {:?}", self.path))?;
        let catalog = Self::parse_catalog(&content)
            .with_context(|| format!("Invalid surgery catalog in {:?}", self.path))?;

        info!("Loaded {} surgery types from {}", catalog.len(), self.path.display());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CatalogError;
    use crate::test_utils::SAMPLE_CATALOG_JSON;
    use tempfile::TempDir;

    #[test]
    fn test_load_catalog_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("surgeries.json");
        fs::write(&path, SAMPLE_CATALOG_JSON)?;

        let repository = JsonCatalogRepository::new(&path);
        let catalog = repository.load_catalog()?;

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.entries()[0].surgery_type, "Appendectomy");
        assert_eq!(catalog.steps_for("CABG").unwrap()[2], "Bypass");
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonCatalogRepository::new(temp_dir.path().join("missing.json"));

        let err = repository.load_catalog().unwrap_err();
        assert!(err.to_string().contains("Failed to read surgery catalog file"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = JsonCatalogRepository::parse_catalog(r#"[{"surgeryType": "CABG"}]"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse surgery catalog JSON"));
    }

    #[test]
    fn test_invariant_violation_keeps_catalog_error() {
        let err = JsonCatalogRepository::parse_catalog(r#"[{"surgeryType": "CABG", "steps": []}]"#)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::EmptySteps("CABG".to_string()))
        );
    }
}
