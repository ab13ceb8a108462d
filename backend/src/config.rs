use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// JSON file holding the surgery catalog
    pub catalog_path: PathBuf,
    /// Default tracing filter when `RUST_LOG` is not set
    pub log_level: String,
    pub notification: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Push notification server endpoint receiving emergency alerts
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/surgeries.json"),
            log_level: "info".to_string(),
            notification: NotificationConfig::default(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8081/send-notification".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Where the active config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Handed in directly by the host
    Provided,
    File(PathBuf),
    /// The config file could not be used; `reason` says why
    Defaults { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: BackendConfig,
    pub source: ConfigSource,
}

impl LoadedConfig {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ConfigSource::Defaults { .. })
    }
}

pub struct ConfigService;

impl ConfigService {
    pub fn parse_config(content: &str) -> Result<BackendConfig> {
        let config: BackendConfig =
            toml::from_str(content).with_context(|| "Failed to parse backend config TOML")?;

        if !(config.notification.endpoint.starts_with("http://")
            || config.notification.endpoint.starts_with("https://"))
        {
            return Err(anyhow::anyhow!(
                "Notification endpoint must be an http(s) URL, got '{}'",
                config.notification.endpoint
            ));
        }
        if config.notification.timeout_secs == 0 {
            return Err(anyhow::anyhow!("Notification timeout must be at least one second"));
        }

        Ok(config)
    }

    pub fn load_config(config_path: &Path) -> Result<BackendConfig> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read backend config file: {:?}", config_path))?;
        Self::parse_config(&content)
    }

    /// Load the config file, falling back to defaults without logging.
    /// The fallback reason travels in `LoadedConfig::source` so the caller
    /// can report it once logging is up.
    pub fn load_config_with_fallback(config_path: &Path) -> LoadedConfig {
        match Self::load_config(config_path) {
            Ok(config) => LoadedConfig {
                config,
                source: ConfigSource::File(config_path.to_path_buf()),
            },
            Err(e) => LoadedConfig {
                config: BackendConfig::default(),
                source: ConfigSource::Defaults {
                    reason: format!("{:#}", e),
                },
            },
        }
    }

    /// Log why a loaded config fell back to defaults, if it did
    pub fn report_fallback(config_path: &Path, loaded: &LoadedConfig) {
        if let ConfigSource::Defaults { reason } = &loaded.source {
            warn!("Failed to load backend config from {:?}: {}", config_path, reason);
            info!("Using default backend config");
        }
    }

    pub fn load_config_or_default(config_path: &Path) -> BackendConfig {
        let loaded = Self::load_config_with_fallback(config_path);
        Self::report_fallback(config_path, &loaded);
        loaded.config
    }
}
