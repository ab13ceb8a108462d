//! HTTP client for the push notification server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use shared::EmergencyNotification;
use tracing::debug;

use crate::config::NotificationConfig;
use crate::domain::notification_service::{NotificationError, NotificationSender};

/// POSTs notifications as JSON to the configured endpoint
#[derive(Clone)]
pub struct PushNotificationClient {
    client: Client,
    endpoint: String,
}

impl PushNotificationClient {
    pub fn new(config: &NotificationConfig) -> Result<Self, NotificationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NotificationError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl NotificationSender for PushNotificationClient {
    async fn send(&self, notification: &EmergencyNotification) -> Result<(), NotificationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(notification)
            .send()
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotificationError::Rejected(status.as_u16()));
        }

        debug!("Notification server answered {} for {}", status, notification.data.or_id);
        Ok(())
    }
}
