//! Emergency alerts for an operating room.
//!
//! Delivery is best effort. A failed send is logged and reported as a
//! `DeliveryOutcome::Failed`; it is never surfaced as an error to the screen
//! and never touches local request state.

use std::sync::Arc;

use async_trait::async_trait;
use shared::EmergencyNotification;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Failed to build notification client: {0}")]
    Client(String),
    #[error("Failed to reach notification server: {0}")]
    Transport(String),
    #[error("Notification server rejected the alert with status {0}")]
    Rejected(u16),
}

/// Outbound channel for push notifications
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, notification: &EmergencyNotification) -> Result<(), NotificationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Failed(String),
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

#[derive(Clone)]
pub struct EmergencyAlertService {
    sender: Arc<dyn NotificationSender>,
}

impl EmergencyAlertService {
    pub fn new(sender: Arc<dyn NotificationSender>) -> Self {
        Self { sender }
    }

    /// Send the emergency alert for `or_id` and wait for the result
    pub async fn send_emergency_alert(&self, or_id: &str) -> DeliveryOutcome {
        let notification = EmergencyNotification::for_room(or_id);
        info!("🚨 Sending emergency alert for operating room {}", or_id);

        match self.sender.send(&notification).await {
            Ok(()) => {
                info!("🚨 Emergency notification sent for operating room {}", or_id);
                DeliveryOutcome::Delivered
            }
            Err(e) => {
                error!("Error sending emergency notification for operating room {}: {}", or_id, e);
                DeliveryOutcome::Failed(e.to_string())
            }
        }
    }

    /// Fire-and-forget variant; must be called from within a tokio runtime
    pub fn dispatch_emergency_alert(&self, or_id: &str) -> JoinHandle<DeliveryOutcome> {
        let service = self.clone();
        let or_id = or_id.to_string();
        tokio::spawn(async move { service.send_emergency_alert(&or_id).await })
    }
}
