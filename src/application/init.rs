//! Initialize workspace use case

use crate::domain::get_template;
use crate::error::{FolioError, Result};
use crate::infrastructure::{Config, FileSystemRepository, WorkspaceRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new workspace at the specified path.
pub fn init(path: &Path, default_template: &str) -> Result<FileSystemRepository> {
    if get_template(default_template).is_none() {
        return Err(FolioError::UnknownTemplate(default_template.to_string()));
    }

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new(default_template))?;

    info!(root = %path.display(), "initialized workspace");
    Ok(repo)
}
