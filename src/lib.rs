//! coverfolio - Portfolio drafts and publishing
//!
//! Pick a template, fill in resume-like content, and publish a read-only
//! page under a stable slug. Drafts live in a single JSON slot inside the
//! workspace's `.coverfolio` directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FolioError;
