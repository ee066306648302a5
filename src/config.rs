//! Configuration management for the drawcheck storefront.
//!
//! TOML file, environment variable overrides, and validation behind a
//! single loader.

use crate::errors::{ConfigError, DrawcheckResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub player: PlayerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            player: PlayerConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the ticket store file
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./drawcheck_data".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Player identity used when the CLI is not given one explicitly
    pub default_player: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            default_player: "guest".to_string(),
        }
    }
}

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    config_path: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_string_lossy().to_string());
        self
    }

    /// Load configuration from file and environment variables
    pub fn load(&self) -> DrawcheckResult<AppConfig> {
        let mut config = if let Some(ref path) = self.config_path {
            self.load_from_file(path)?
        } else {
            AppConfig::default()
        };

        self.apply_env_overrides(&mut config);
        self.validate(&config)?;

        Ok(config)
    }

    fn load_from_file(&self, path: &str) -> DrawcheckResult<AppConfig> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("Failed to read {}: {}", path, e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::LoadFailed(format!("Failed to parse TOML: {}", e)).into())
    }

    fn apply_env_overrides(&self, config: &mut AppConfig) {
        if let Ok(data_dir) = env::var("DRAWCHECK_DATA_DIR") {
            config.storage.data_dir = data_dir;
        }
        if let Ok(player) = env::var("DRAWCHECK_PLAYER") {
            config.player.default_player = player;
        }
    }

    fn validate(&self, config: &AppConfig) -> DrawcheckResult<()> {
        if config.storage.data_dir.is_empty() {
            return Err(ConfigError::MissingRequired("storage.data_dir".to_string()).into());
        }
        if config.player.default_player.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "player.default_player".to_string(),
                value: String::new(),
                reason: "Player id cannot be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, config: &AppConfig, path: &str) -> DrawcheckResult<()> {
        let toml_string = toml::to_string_pretty(config)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to write to {}: {}", path, e)).into())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage.data_dir, "./drawcheck_data");
        assert_eq!(config.player.default_player, "guest");
    }

    #[test]
    fn test_config_validation() {
        let loader = ConfigLoader::new();
        let mut config = AppConfig::default();
        assert!(loader.validate(&config).is_ok());

        config.storage.data_dir = String::new();
        assert!(loader.validate(&config).is_err());
    }

    #[test]
    fn test_save_and_load_config() -> DrawcheckResult<()> {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        let mut original = AppConfig::default();
        original.player.default_player = "alice".to_string();

        let loader = ConfigLoader::new();
        loader.save(&original, path)?;

        let loaded = ConfigLoader::new().with_path(path).load()?;
        assert_eq!(loaded.player.default_player, "alice");
        assert_eq!(loaded.storage.data_dir, original.storage.data_dir);

        Ok(())
    }
}
