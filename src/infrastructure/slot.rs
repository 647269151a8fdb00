//! Single key-value slot holding the serialized draft collection

use crate::error::{FolioError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Storage key of the draft collection
pub const DRAFTS_KEY: &str = "coverfolio.portfolios";

/// One persisted string value. Reads return `None` when nothing was stored.
pub trait KeyValueSlot {
    fn read(&self) -> Result<Option<String>>;

    fn write(&self, contents: &str) -> Result<()>;
}

/// Slot backed by a single file
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        FileSlot { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueSlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FolioError::Io(e)),
        }
    }

    /// Best-effort atomic replace: write a temp file in the same directory,
    /// then rename it into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("portfolios.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// In-memory slot, for tests and embedding
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with raw contents
    pub fn with_contents(contents: impl Into<String>) -> Self {
        MemorySlot {
            value: Mutex::new(Some(contents.into())),
        }
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        let guard = self
            .value
            .lock()
            .map_err(|_| FolioError::Config("memory slot lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        let mut guard = self
            .value
            .lock()
            .map_err(|_| FolioError::Config("memory slot lock poisoned".to_string()))?;
        *guard = Some(contents.to_string());
        Ok(())
    }
}
