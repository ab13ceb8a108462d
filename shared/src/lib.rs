use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One entry of the surgery catalog: a surgery type and its ordered stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurgeryDefinition {
    /// Surgery type name, matched exactly (case-sensitive)
    pub surgery_type: String,
    /// Ordered stage names, non-empty and unique within the surgery type
    pub steps: Vec<String>,
}

/// Derived progression of a surgery through its catalog stages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageProgress {
    /// 1-based position of the current stage (0 when the stage is unknown)
    pub completed_count: usize,
    /// Number of stages for the surgery type (0 when the type is unknown)
    pub total_count: usize,
    /// Completion in the range 0..=100, unrounded
    pub percentage: f64,
}

impl StageProgress {
    /// Progress for a surgery type that is not in the catalog
    pub fn zero() -> Self {
        Self {
            completed_count: 0,
            total_count: 0,
            percentage: 0.0,
        }
    }

    pub fn new(completed_count: usize, total_count: usize) -> Self {
        if total_count == 0 {
            return Self::zero();
        }
        let completed_count = completed_count.min(total_count);
        let percentage = completed_count as f64 / total_count as f64 * 100.0;
        Self {
            completed_count,
            total_count,
            percentage,
        }
    }

    /// Percentage rounded to the nearest whole number for display
    pub fn rounded_percentage(&self) -> u32 {
        self.percentage.round() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.total_count > 0 && self.completed_count == self.total_count
    }

    /// Label shown next to "Surgery Progression", e.g. `50% Complete (Stage 2/4)`
    pub fn display_label(&self) -> String {
        if self.total_count == 0 {
            return "0% Complete".to_string();
        }
        format!(
            "{}% Complete (Stage {}/{})",
            self.rounded_percentage(),
            self.completed_count,
            self.total_count
        )
    }
}

impl fmt::Display for StageProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

/// Equipment an anesthesia tech can be asked to bring to the room.
///
/// Declaration order is the order used for checklists and submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquipmentItem {
    #[serde(rename = "arterialLine")]
    ArterialLine,
    #[serde(rename = "glidescope")]
    Glidescope,
    #[serde(rename = "POCUS")]
    Pocus,
    #[serde(rename = "vascularUltrasound")]
    VascularUltrasound,
    #[serde(rename = "CO2Absorber")]
    Co2Absorber,
}

impl EquipmentItem {
    pub const COUNT: usize = 5;

    pub const ALL: [EquipmentItem; Self::COUNT] = [
        EquipmentItem::ArterialLine,
        EquipmentItem::Glidescope,
        EquipmentItem::Pocus,
        EquipmentItem::VascularUltrasound,
        EquipmentItem::Co2Absorber,
    ];

    /// Wire identifier of the item
    pub fn id(&self) -> &'static str {
        match self {
            EquipmentItem::ArterialLine => "arterialLine",
            EquipmentItem::Glidescope => "glidescope",
            EquipmentItem::Pocus => "POCUS",
            EquipmentItem::VascularUltrasound => "vascularUltrasound",
            EquipmentItem::Co2Absorber => "CO2Absorber",
        }
    }

    /// Position of the item in declaration order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for EquipmentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for EquipmentItem {
    type Err = EquipmentItemParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipmentItem::ALL
            .iter()
            .copied()
            .find(|item| item.id() == s)
            .ok_or_else(|| EquipmentItemParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentItemParseError(pub String);

impl fmt::Display for EquipmentItemParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown equipment item: {}", self.0)
    }
}

impl std::error::Error for EquipmentItemParseError {}

/// One checkbox row of the quick request list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentChecklistRow {
    pub item: EquipmentItem,
    pub label: String,
    pub checked: bool,
}

/// Result of submitting the quick request modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRequestReceipt {
    /// Format: "request::<uuid>"
    pub request_id: String,
    /// Requested items in declaration order
    pub items: Vec<EquipmentItem>,
    /// Alert title, always "Request Submitted"
    pub title: String,
    /// Alert body listing the requested item identifiers
    pub message: String,
    /// RFC 3339 submission time
    pub submitted_at: String,
}

impl EquipmentRequestReceipt {
    pub fn generate_id() -> String {
        format!("request::{}", uuid::Uuid::new_v4())
    }
}

/// Push notification priority as understood by the notification server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    Normal,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    pub or_id: String,
}

/// Payload POSTed to the notification server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyNotification {
    pub title: String,
    pub body: String,
    pub data: NotificationData,
    pub priority: NotificationPriority,
}

impl EmergencyNotification {
    /// High priority emergency alert for the given operating room
    pub fn for_room(or_id: &str) -> Self {
        Self {
            title: "Emergency Alert!".to_string(),
            body: format!("Emergency in Operating Room Number {}!", or_id),
            data: NotificationData {
                or_id: or_id.to_string(),
            },
            priority: NotificationPriority::High,
        }
    }
}

/// Anesthesia provider taking over the room at shift change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnesthesiaReplacement {
    pub name: String,
    pub shift: String,
}

/// Operating room as supplied by the room list context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingRoom {
    pub id: String,
    pub surgeon_name: String,
    /// Anesthesia provider currently in the room
    pub ra_name: String,
    pub shift: String,
    #[serde(default)]
    pub replacement: Option<AnesthesiaReplacement>,
    pub surgery_type: String,
    pub surgery_stage: String,
}
