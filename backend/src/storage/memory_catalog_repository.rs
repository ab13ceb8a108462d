use anyhow::Result;

use shared::SurgeryDefinition;

use crate::domain::models::SurgeryCatalog;
use crate::storage::traits::SurgeryCatalogStorage;

/// Catalog held in memory, for hosts that bundle their reference data
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    entries: Vec<SurgeryDefinition>,
}

impl InMemoryCatalogRepository {
    pub fn new(entries: Vec<SurgeryDefinition>) -> Self {
        Self { entries }
    }
}

impl SurgeryCatalogStorage for InMemoryCatalogRepository {
    fn load_catalog(&self) -> Result<SurgeryCatalog> {
        Ok(SurgeryCatalog::new(self.entries.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_definitions;

    #[test]
    fn test_load_validates_entries() {
        let repository = InMemoryCatalogRepository::new(sample_definitions());
        assert_eq!(repository.load_catalog().unwrap().len(), 3);

        let mut entries = sample_definitions();
        entries[1].steps.clear();
        assert!(InMemoryCatalogRepository::new(entries).load_catalog().is_err());
    }

    #[test]
    fn test_default_is_empty_catalog() {
        let catalog = InMemoryCatalogRepository::default().load_catalog().unwrap();
        assert!(catalog.is_empty());
    }
}
