//! Text lines for the operating room detail panel.

use std::fmt;

use chrono::{DateTime, Duration, TimeZone};
use serde::{Deserialize, Serialize};
use shared::OperatingRoom;
use tracing::warn;

use crate::domain::progress_service::ProgressService;

/// Everything the detail panel prints for one room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDetails {
    pub title: String,
    pub surgeon_line: String,
    pub anesthesia_line: String,
    pub surgery_type_line: String,
    pub surgery_stage_line: String,
    pub progression_line: String,
    pub start_time_line: String,
}

/// `Anesthesia: <provider> (<shift>) → <handover>`
pub fn anesthesia_line(room: &OperatingRoom) -> String {
    match &room.replacement {
        Some(replacement) => format!(
            "Anesthesia: {} ({}) → {} ({})",
            room.ra_name, room.shift, replacement.name, replacement.shift
        ),
        None => format!("Anesthesia: {} ({}) → finish case", room.ra_name, room.shift),
    }
}

/// Shown when the elapsed time cannot be turned into a clock time
pub const UNKNOWN_START_TIME: &str = "--:--";

/// Wall clock time (`HH:MM`) the operation started, given how long it has run.
/// Negative elapsed times are treated as zero; elapsed times too large to
/// subtract from `now` give `UNKNOWN_START_TIME`.
pub fn operation_start_time<Tz>(elapsed_seconds: i64, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let start = Duration::try_seconds(elapsed_seconds.max(0))
        .and_then(|elapsed| now.clone().checked_sub_signed(elapsed));

    match start {
        Some(start) => start.format("%H:%M").to_string(),
        None => {
            warn!("Operation elapsed time {}s is out of range", elapsed_seconds);
            UNKNOWN_START_TIME.to_string()
        }
    }
}

#[derive(Clone)]
pub struct RoomDetailsService {
    progress_service: ProgressService,
}

impl RoomDetailsService {
    pub fn new(progress_service: ProgressService) -> Self {
        Self { progress_service }
    }

    pub fn describe<Tz>(
        &self,
        room: &OperatingRoom,
        elapsed_seconds: i64,
        now: &DateTime<Tz>,
    ) -> RoomDetails
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let progress = self.progress_service.progress_for_room(room);
        RoomDetails {
            title: room.id.clone(),
            surgeon_line: format!("Surgeon Name: {}", room.surgeon_name),
            anesthesia_line: anesthesia_line(room),
            surgery_type_line: format!("Surgery Type: {}", room.surgery_type),
            surgery_stage_line: format!("Surgery Stage: {}", room.surgery_stage),
            progression_line: format!("Surgery Progression: {}", progress.display_label()),
            start_time_line: format!(
                "Operation Start Time: {}",
                operation_start_time(elapsed_seconds, now)
            ),
        }
    }
}
