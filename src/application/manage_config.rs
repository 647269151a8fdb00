//! Config management use case

use crate::domain::get_template;
use crate::error::{FolioError, Result};
use crate::infrastructure::{Config, FileSystemRepository, WorkspaceRepository};

const SETTABLE_KEYS: &str = "default_template, base_url, editor";

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "default_template" => Ok(config.default_template),
            "base_url" => Ok(config.base_url),
            "editor" => Ok(config.editor),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(FolioError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}, created",
                key, SETTABLE_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "default_template" => {
                if get_template(value).is_none() {
                    return Err(FolioError::UnknownTemplate(value.to_string()));
                }
                config.default_template = value.to_string();
            }
            "base_url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(FolioError::Config(format!(
                        "Invalid base_url: '{}'. Expected an http:// or https:// address",
                        value
                    )));
                }
                config.base_url = value.trim_end_matches('/').to_string();
            }
            "editor" => {
                config.editor = value.to_string();
            }
            "created" => {
                return Err(FolioError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(FolioError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, SETTABLE_KEYS
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
