//! # Domain Module
//!
//! Business logic behind the operating room detail screen. Nothing here
//! renders anything; the UI host asks these services for derived values and
//! feeds user actions back in.
//!
//! ## Module Organization
//!
//! - **progress_service**: stage i of n and percentage complete from the surgery catalog
//! - **equipment_request**: quick request checkboxes, submission and the modal lifecycle
//! - **notification_service**: best-effort emergency alerts through a `NotificationSender`
//! - **room_details**: anesthesia handover and operation start time lines
//! - **models**: the validated `SurgeryCatalog`
//!
//! ## Rules
//!
//! - Unknown surgery types or stages give zero progress, never an error
//! - Equipment items form a closed set; unknown identifiers are rejected
//! - A failed emergency alert is logged and otherwise ignored

pub mod equipment_request;
pub mod models;
pub mod notification_service;
pub mod progress_service;
pub mod room_details;

pub use equipment_request::{EquipmentRequestError, EquipmentRequestSession, EquipmentRequestState};
pub use notification_service::*;
pub use progress_service::*;
pub use room_details::*;
