//! File system workspace

use crate::error::{FolioError, Result};
use crate::infrastructure::config::WORKSPACE_DIR;
use crate::infrastructure::slot::FileSlot;
use crate::infrastructure::store::LocalDraftStore;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

const DRAFTS_FILE: &str = "portfolios.json";

/// Environment variable naming the workspace root
pub const ROOT_ENV: &str = "COVERFOLIO_ROOT";

/// Abstract repository for workspace operations
pub trait WorkspaceRepository {
    /// Get the root directory of this workspace
    fn root(&self) -> &Path;

    /// Load configuration from .coverfolio/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .coverfolio/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .coverfolio directory exists
    fn is_initialized(&self) -> bool;

    /// Create .coverfolio directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of WorkspaceRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks COVERFOLIO_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(FolioError::Config(format!(
                    "{} is set to '{}' but no .coverfolio directory found. \
                    Run 'coverfolio init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(FolioError::NotFolioDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    /// Path of the file holding the draft collection
    pub fn drafts_path(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR).join(DRAFTS_FILE)
    }

    /// Draft store persisted in this workspace
    pub fn draft_store(&self) -> LocalDraftStore<FileSlot> {
        LocalDraftStore::new(FileSlot::new(self.drafts_path()))
    }
}

impl WorkspaceRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(FolioError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&workspace_dir)?;
        fs::write(self.drafts_path(), "[]")?;
        Ok(())
    }
}
