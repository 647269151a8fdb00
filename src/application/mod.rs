//! Application layer - Use cases and orchestration

pub mod drafts;
pub mod import_resume;
pub mod init;
pub mod lookup;
pub mod manage_config;
pub mod publish;

pub use drafts::DraftService;
pub use import_resume::{import_resume, resume_data, ImportOutcome};
pub use lookup::{find_public, public_view, PublicView};
pub use manage_config::ConfigService;
pub use publish::{public_path, publish};
