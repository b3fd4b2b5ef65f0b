//! JSON Configuration Management
//!
//! Handles reading and writing the application configuration file.

use std::fs;
use std::path::PathBuf;

use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::{config_path, ensure_rubricxpert_dir};

/// Configuration service for managing app settings
#[derive(Debug)]
pub struct ConfigService {
    config_path: PathBuf,
    config: AppConfig,
}

impl ConfigService {
    /// Create a new config service, loading existing config or creating defaults
    pub fn new() -> AppResult<Self> {
        // Ensure the config directory exists
        ensure_rubricxpert_dir()?;

        let config_path = config_path()?;
        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            let default_config = AppConfig::default();
            Self::save_to_file(&config_path, &default_config)?;
            default_config
        };

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Load configuration from a file
    fn load_from_file(path: &PathBuf) -> AppResult<AppConfig> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate().map_err(AppError::validation)?;
        Ok(config)
    }

    /// Save configuration to a file with pretty formatting
    fn save_to_file(path: &PathBuf, config: &AppConfig) -> AppResult<()> {
        config.validate().map_err(AppError::validation)?;
        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a clone of the current configuration
    pub fn get_config_clone(&self) -> AppConfig {
        self.config.clone()
    }

    /// Update the configuration with a partial update
    pub fn update_config(&mut self, update: SettingsUpdate) -> AppResult<AppConfig> {
        self.config.apply_update(update);
        self.save()?;
        Ok(self.config.clone())
    }

    /// Save the current configuration to disk
    pub fn save(&self) -> AppResult<()> {
        Self::save_to_file(&self.config_path, &self.config)
    }

    /// Reset configuration to defaults
    pub fn reset(&mut self) -> AppResult<()> {
        self.config = AppConfig::default();
        self.save()?;
        Ok(())
    }

    /// Check if the config service is healthy
    pub fn is_healthy(&self) -> bool {
        self.config_path.exists() && self.config.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_at(dir: &tempfile::TempDir) -> ConfigService {
        let path = dir.path().join("config.json");
        let config = AppConfig::default();
        ConfigService::save_to_file(&path, &config).unwrap();
        ConfigService {
            config_path: path,
            config,
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        let config = AppConfig::default();

        ConfigService::save_to_file(&path, &config).unwrap();
        assert!(path.exists());

        let loaded = ConfigService::load_from_file(&path).unwrap();
        assert_eq!(loaded.analyze_url, config.analyze_url);
        assert_eq!(loaded.score_scale_max, config.score_scale_max);
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"analyze_url": "not-a-url"}"#).unwrap();

        assert!(ConfigService::load_from_file(&path).is_err());
    }

    #[test]
    fn test_config_update_persists() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut service = service_at(&temp_dir);

        let update = SettingsUpdate {
            chat_url: Some("https://grader.example.com/chat".to_string()),
            ..Default::default()
        };
        let updated = service.update_config(update).unwrap();
        assert_eq!(updated.chat_url, "https://grader.example.com/chat");

        let reloaded = ConfigService::load_from_file(&service.config_path).unwrap();
        assert_eq!(reloaded.chat_url, "https://grader.example.com/chat");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut service = service_at(&temp_dir);

        service
            .update_config(SettingsUpdate {
                score_scale_max: Some(10.0),
                ..Default::default()
            })
            .unwrap();
        service.reset().unwrap();

        assert_eq!(service.get_config().score_scale_max, 4.0);
    }

    #[test]
    fn test_is_healthy() {
        let temp_dir = tempfile::tempdir().unwrap();
        let service = service_at(&temp_dir);
        assert!(service.is_healthy());
    }
}
