//! # OR Tracker Backend
//!
//! Non-visual logic for the operating room detail screen.
//!
//! This crate brings together:
//! - **Domain**: surgery progression, equipment quick requests, emergency alerts
//! - **Storage**: where the surgery catalog is read from
//! - **IO**: the HTTP client for the push notification server
//!
//! ## Architecture
//!
//! ```text
//! UI host (screen)
//!     ↓
//! Backend (service wiring)
//!     ↓
//! Domain services ──→ IO (push notifications)
//!     ↓
//! Storage (surgery catalog)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod logging;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::config::{BackendConfig, ConfigService, ConfigSource, LoadedConfig};
use crate::domain::{
    EmergencyAlertService, EquipmentRequestSession, ProgressService, RoomDetailsService,
};
use crate::io::PushNotificationClient;
use crate::storage::{JsonCatalogRepository, SurgeryCatalogStorage};

/// Main backend struct that holds all services
#[derive(Clone)]
pub struct Backend {
    pub progress_service: ProgressService,
    pub room_details_service: RoomDetailsService,
    pub emergency_alert_service: EmergencyAlertService,
    config: BackendConfig,
    config_source: ConfigSource,
}

impl Backend {
    /// Build the backend, reading the catalog from `config.catalog_path`
    pub fn new(config: BackendConfig) -> Result<Self> {
        let repository = JsonCatalogRepository::new(&config.catalog_path);
        Self::with_storage(config, &repository)
    }

    /// Load config from a TOML file (defaults when unusable), set up
    /// tracing and build the backend
    pub fn from_config_file(config_path: &Path) -> Result<Self> {
        let loaded = ConfigService::load_config_with_fallback(config_path);
        logging::init_tracing(&loaded.config.log_level);
        ConfigService::report_fallback(config_path, &loaded);
        Self::from_loaded_config(loaded)
    }

    pub fn from_loaded_config(loaded: LoadedConfig) -> Result<Self> {
        let repository = JsonCatalogRepository::new(&loaded.config.catalog_path);
        let mut backend = Self::with_storage(loaded.config, &repository)?;
        backend.config_source = loaded.source;
        Ok(backend)
    }

    pub fn with_storage<S: SurgeryCatalogStorage>(config: BackendConfig, storage: &S) -> Result<Self> {
        info!("Loading surgery catalog");
        let catalog = Arc::new(storage.load_catalog()?);

        info!("Setting up notification client for {}", config.notification.endpoint);
        let push_client = PushNotificationClient::new(&config.notification)?;

        let progress_service = ProgressService::new(catalog);
        let room_details_service = RoomDetailsService::new(progress_service.clone());
        let emergency_alert_service = EmergencyAlertService::new(Arc::new(push_client));

        Ok(Self {
            progress_service,
            room_details_service,
            emergency_alert_service,
            config,
            config_source: ConfigSource::Provided,
        })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Whether the config came from the file, the host or fell back to defaults
    pub fn config_source(&self) -> &ConfigSource {
        &self.config_source
    }

    /// A closed equipment request modal for one screen
    pub fn equipment_request_session(&self) -> EquipmentRequestSession {
        EquipmentRequestSession::new()
    }
}
