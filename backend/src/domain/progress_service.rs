//! Surgery progression derived from the surgery catalog.
//!
//! Progress is never stored. It is recomputed from the room's surgery type and
//! current stage each time the detail screen asks for it. Unknown surgery
//! types and stages degrade to zero progress instead of failing, so the
//! screen can always show a "0% Complete" line.

use std::sync::Arc;

use shared::{OperatingRoom, StageProgress};
use tracing::debug;

use crate::domain::models::SurgeryCatalog;

/// Compute how far `current_stage` is through the stages of `surgery_type`.
///
/// The completed count is the 1-based position of the stage, or 0 when the
/// stage is not one of the surgery's stages. An unknown surgery type yields
/// `StageProgress::zero()`.
pub fn compute_progress(
    catalog: &SurgeryCatalog,
    surgery_type: &str,
    current_stage: &str,
) -> StageProgress {
    let Some(steps) = catalog.steps_for(surgery_type) else {
        debug!("No catalog entry for surgery type '{}'", surgery_type);
        return StageProgress::zero();
    };

    let completed_count = steps
        .iter()
        .position(|step| step == current_stage)
        .map_or(0, |index| index + 1);

    StageProgress::new(completed_count, steps.len())
}

/// Service wrapping the shared catalog for progression lookups
#[derive(Clone)]
pub struct ProgressService {
    catalog: Arc<SurgeryCatalog>,
}

impl ProgressService {
    pub fn new(catalog: Arc<SurgeryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &SurgeryCatalog {
        &self.catalog
    }

    pub fn compute_progress(&self, surgery_type: &str, current_stage: &str) -> StageProgress {
        compute_progress(&self.catalog, surgery_type, current_stage)
    }

    pub fn progress_for_room(&self, room: &OperatingRoom) -> StageProgress {
        self.compute_progress(&room.surgery_type, &room.surgery_stage)
    }

    /// Ordered stages for a surgery type; empty when the type is unknown
    pub fn surgery_steps(&self, surgery_type: &str) -> Vec<String> {
        self.catalog
            .steps_for(surgery_type)
            .map(|steps| steps.to_vec())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_catalog, sample_room};

    #[test]
    fn test_first_stage_counts_as_one() {
        let catalog = sample_catalog();
        for entry in catalog.entries() {
            let progress = compute_progress(&catalog, &entry.surgery_type, &entry.steps[0]);
            assert_eq!(progress.completed_count, 1, "{}", entry.surgery_type);
            assert_eq!(progress.total_count, entry.steps.len());
        }
    }

    #[test]
    fn test_last_stage_is_complete() {
        let catalog = sample_catalog();
        for entry in catalog.entries() {
            let last = entry.steps.last().unwrap();
            let progress = compute_progress(&catalog, &entry.surgery_type, last);
            assert_eq!(progress.completed_count, progress.total_count);
            assert_eq!(progress.percentage, 100.0);
            assert!(progress.is_complete());
        }
    }

    #[test]
    fn test_middle_stage() {
        let catalog = sample_catalog();
        let progress = compute_progress(&catalog, "CABG", "Bypass");
        assert_eq!(progress.completed_count, 3);
        assert_eq!(progress.total_count, 6);
        assert_eq!(progress.rounded_percentage(), 50);
        assert_eq!(progress.display_label(), "50% Complete (Stage 3/6)");

        let progress = compute_progress(&catalog, "Cholecystectomy", "Port Placement");
        assert_eq!(progress.display_label(), "67% Complete (Stage 2/3)");
    }

    #[test]
    fn test_unknown_surgery_type_is_zero() {
        let catalog = sample_catalog();
        for (surgery_type, stage) in [
            ("Craniotomy", "Incision"),
            ("appendectomy", "Incision"),
            ("", ""),
        ] {
            let progress = compute_progress(&catalog, surgery_type, stage);
            assert_eq!(progress, StageProgress::zero());
            assert_eq!(progress.display_label(), "0% Complete");
        }
    }

    #[test]
    fn test_unknown_stage_of_known_type() {
        let catalog = sample_catalog();
        let progress = compute_progress(&catalog, "Appendectomy", "Sternotomy");
        assert_eq!(progress.completed_count, 0);
        assert_eq!(progress.total_count, 4);
        assert_eq!(progress.percentage, 0.0);
    }

    #[test]
    fn test_empty_catalog() {
        let progress = compute_progress(&SurgeryCatalog::empty(), "Appendectomy", "Incision");
        assert_eq!(progress, StageProgress::zero());
    }

    #[test]
    fn test_service_room_progress_and_steps() {
        let service = ProgressService::new(Arc::new(sample_catalog()));
        let room = sample_room();

        assert_eq!(service.progress_for_room(&room).completed_count, 3);
        assert_eq!(service.surgery_steps("Cholecystectomy").len(), 3);
        assert!(service.surgery_steps("Unknown").is_empty());
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let service = ProgressService::new(Arc::new(sample_catalog()));
        let first = service.compute_progress("Appendectomy", "Incision");
        let second = service.compute_progress("Appendectomy", "Incision");
        assert_eq!(first, second);
    }
}
