//! Shared fixtures for backend tests.
//!
//! Stands in for the sample case data the screen used to pick from at random.

use crate::domain::models::SurgeryCatalog;
use shared::{AnesthesiaReplacement, OperatingRoom, SurgeryDefinition};

pub const SAMPLE_CATALOG_JSON: &str = r#"[
    {
        "surgeryType": "Appendectomy",
        "steps": ["Anesthesia Induction", "Incision", "Appendix Removal", "Closure"]
    },
    {
        "surgeryType": "CABG",
        "steps": ["Anesthesia Induction", "Sternotomy", "Bypass", "Grafting", "Weaning", "Closure"]
    },
    {
        "surgeryType": "Cholecystectomy",
        "steps": ["Anesthesia Induction", "Port Placement", "Dissection"]
    }
]"#;

pub fn sample_definitions() -> Vec<SurgeryDefinition> {
    serde_json::from_str(SAMPLE_CATALOG_JSON).expect("sample catalog is valid JSON")
}

pub fn sample_catalog() -> SurgeryCatalog {
    SurgeryCatalog::new(sample_definitions()).expect("sample catalog is valid")
}

pub fn sample_room() -> OperatingRoom {
    OperatingRoom {
        id: "OR 4".to_string(),
        surgeon_name: "Dr. Alvarez".to_string(),
        ra_name: "Jordan Lee".to_string(),
        shift: "7a-3p".to_string(),
        replacement: Some(AnesthesiaReplacement {
            name: "Sam Ortiz".to_string(),
            shift: "3p-11p".to_string(),
        }),
        surgery_type: "CABG".to_string(),
        surgery_stage: "Bypass".to_string(),
    }
}
