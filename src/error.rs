//! Error types for coverfolio

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for coverfolio
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Not a coverfolio directory: {0}")]
    NotFolioDirectory(PathBuf),

    #[error("Draft not found: {0}")]
    DraftNotFound(String),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Portfolio not found or not published: {0}")]
    PublicNotFound(String),

    #[error("Invalid field path: {0}")]
    InvalidPath(String),

    #[error("Resume import error: {0}")]
    ResumeImport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FolioError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FolioError::NotFolioDirectory(_) => 2,
            FolioError::DraftNotFound(_) => 3,
            FolioError::UnknownTemplate(_) => 4,
            FolioError::PublicNotFound(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FolioError::NotFolioDirectory(path) => {
                format!(
                    "Not a coverfolio directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'coverfolio init' in this directory to create a workspace\n\
                    • Navigate to an existing coverfolio directory\n\
                    • Set COVERFOLIO_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            FolioError::DraftNotFound(id) => {
                format!(
                    "Draft not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'coverfolio list' to see draft ids\n\
                    • Draft ids are full UUIDs, not slugs",
                    id
                )
            }
            FolioError::UnknownTemplate(key) => {
                format!(
                    "Unknown template: '{}'\n\n\
                    Use 'coverfolio templates' to see available templates\n\
                    Example: coverfolio new --template classic",
                    key
                )
            }
            FolioError::PublicNotFound(slug) => {
                format!(
                    "Portfolio not found or not published: '{}'\n\n\
                    Suggestions:\n\
                    • Publish the draft first: coverfolio publish <id>\n\
                    • Check the slug printed by 'coverfolio list'",
                    slug
                )
            }
            FolioError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: coverfolio config editor 'vim'",
                    msg
                )
            }
            FolioError::InvalidPath(path) => {
                format!(
                    "Invalid field path: '{}'\n\n\
                    Paths are dot separated, with numbers indexing repeatable sections\n\
                    Examples:\n\
                    coverfolio set <id> about.name 'Ada Lovelace'\n\
                    coverfolio set <id> experience.0.role 'Engineer'",
                    path
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;
