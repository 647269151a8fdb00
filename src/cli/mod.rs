//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_draft, format_draft_list, format_public_view, format_template, format_template_list,
};
