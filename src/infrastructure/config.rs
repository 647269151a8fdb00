//! Configuration management

use crate::error::{FolioError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const WORKSPACE_DIR: &str = ".coverfolio";
const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_TEMPLATE: &str = "classic";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Template used by `new` when none is given
    #[serde(default = "default_template")]
    pub default_template: String,
    /// Origin public pages are served from; pages live at `<base_url>/p/<slug>`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub editor: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(default_template: &str) -> Self {
        Config {
            default_template: default_template.to_string(),
            base_url: default_base_url(),
            editor: Self::detect_default_editor(),
            created: Utc::now(),
        }
    }

    /// Load config from .coverfolio/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FolioError::NotFolioDirectory(path.to_path_buf())
            } else {
                FolioError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| FolioError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .coverfolio/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join(CONFIG_FILE);

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| FolioError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Public address of a page published under `slug`
    pub fn public_url(&self, slug: &str) -> String {
        format!("{}/p/{}", self.base_url.trim_end_matches('/'), slug)
    }

    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}
