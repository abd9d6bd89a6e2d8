use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::provider::SyncGate;

/// Source of a configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Synchronization settings persisted by the surrounding tool.
///
/// The mapping editor only needs the enabled flag; a loaded `SyncSettings`
/// therefore doubles as the editor's [`SyncGate`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SyncSettings {
    /// Whether contact synchronization is switched on (default: false)
    #[serde(default)]
    pub enabled: bool,
}

impl SyncGate for SyncSettings {
    fn synchronization_enabled(&self) -> bool {
        self.enabled
    }
}

/// Mapping editor configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Entity type whose schema backs the mapping (default: "contact")
    pub entity_type: ConfigValue<String>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
    /// Synchronization settings
    pub sync: SyncSettings,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    entity_type: Option<String>,
    sync: Option<SyncSettings>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut entity_type = ConfigValue::new(
            crate::editor::ENTITY_CONTACT.to_string(),
            ConfigSource::Default,
        );
        let mut config_file = None;
        let mut sync = SyncSettings::default();

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(entity) = file_config.entity_type {
                entity_type = ConfigValue::new(entity, ConfigSource::File);
            }
            if let Some(sync_settings) = file_config.sync {
                sync = sync_settings;
            }
        }

        // Apply environment variable overrides
        if let Ok(entity) = std::env::var("CRM_ENTITY_TYPE") {
            entity_type = ConfigValue::new(entity, ConfigSource::Environment);
        }
        if let Ok(flag) = std::env::var("CRM_SYNC_ENABLED") {
            match parse_enabled_flag(&flag) {
                Some(enabled) => sync.enabled = enabled,
                None => {
                    tracing::warn!("Ignoring unrecognized CRM_SYNC_ENABLED value '{}'", flag);
                }
            }
        }

        Ok(Self {
            entity_type,
            config_file,
            sync,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/crm-sync/
    /// - macOS: ~/Library/Application Support/crm-sync/
    /// - Windows: %APPDATA%/crm-sync/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("crm-sync")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

/// Parses a boolean environment flag ("1"/"true"/"yes", "0"/"false"/"no").
fn parse_enabled_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
