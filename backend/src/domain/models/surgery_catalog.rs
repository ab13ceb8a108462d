use shared::SurgeryDefinition;
use std::collections::HashSet;

/// Immutable reference list of surgery types and their ordered stages.
///
/// Built once when the backend starts; every entry has a non-empty list of
/// unique stage names and surgery types are unique across the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurgeryCatalog {
    entries: Vec<SurgeryDefinition>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Surgery type '{0}' has no stages")]
    EmptySteps(String),
    #[error("Surgery type '{surgery_type}' lists stage '{stage}' more than once")]
    DuplicateStage { surgery_type: String, stage: String },
    #[error("Surgery type '{0}' appears more than once in the catalog")]
    DuplicateSurgeryType(String),
}

impl SurgeryCatalog {
    pub fn new(entries: Vec<SurgeryDefinition>) -> Result<Self, CatalogError> {
        let mut seen_types = HashSet::new();
        for entry in &entries {
            if entry.steps.is_empty() {
                return Err(CatalogError::EmptySteps(entry.surgery_type.clone()));
            }
            if !seen_types.insert(entry.surgery_type.as_str()) {
                return Err(CatalogError::DuplicateSurgeryType(entry.surgery_type.clone()));
            }
            let mut seen_stages = HashSet::new();
            for stage in &entry.steps {
                if !seen_stages.insert(stage.as_str()) {
                    return Err(CatalogError::DuplicateStage {
                        surgery_type: entry.surgery_type.clone(),
                        stage: stage.clone(),
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive lookup by surgery type
    pub fn find(&self, surgery_type: &str) -> Option<&SurgeryDefinition> {
        self.entries.iter().find(|entry| entry.surgery_type == surgery_type)
    }

    pub fn steps_for(&self, surgery_type: &str) -> Option<&[String]> {
        self.find(surgery_type).map(|entry| entry.steps.as_slice())
    }

    pub fn entries(&self) -> &[SurgeryDefinition] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(surgery_type: &str, steps: &[&str]) -> SurgeryDefinition {
        SurgeryDefinition {
            surgery_type: surgery_type.to_string(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = SurgeryCatalog::new(vec![
            definition("Appendectomy", &["Prep", "Incision", "Closure"]),
            definition("CABG", &["Prep", "Bypass", "Closure"]),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.steps_for("CABG").unwrap().len(), 3);
        assert!(catalog.find("cabg").is_none());
        assert!(catalog.find("CABG ").is_none());
    }

    #[test]
    fn test_rejects_empty_steps() {
        let err = SurgeryCatalog::new(vec![definition("Appendectomy", &[])]).unwrap_err();
        assert_eq!(err, CatalogError::EmptySteps("Appendectomy".to_string()));
    }

    #[test]
    fn test_rejects_duplicate_stage() {
        let err = SurgeryCatalog::new(vec![definition("Whipple", &["Prep", "Resection", "Prep"])])
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateStage {
                surgery_type: "Whipple".to_string(),
                stage: "Prep".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_surgery_type() {
        let err = SurgeryCatalog::new(vec![
            definition("Whipple", &["Prep"]),
            definition("Whipple", &["Resection"]),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateSurgeryType("Whipple".to_string()));
    }

    #[test]
    fn test_same_stage_name_allowed_across_types() {
        let catalog = SurgeryCatalog::new(vec![
            definition("Appendectomy", &["Prep", "Closure"]),
            definition("Cholecystectomy", &["Prep", "Closure"]),
        ]);
        assert!(catalog.is_ok());
    }
}
