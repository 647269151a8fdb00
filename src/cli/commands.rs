//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coverfolio")]
#[command(about = "Build portfolio pages from templates and publish them", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Template new drafts use by default
        #[arg(short, long, default_value = "classic")]
        template: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// List available templates
    Templates,

    /// Show a template's form and default theme
    Template {
        /// Template key (e.g., classic, modern)
        key: String,
    },

    /// Create a new draft
    New {
        /// Draft title
        #[arg(long)]
        title: Option<String>,

        /// Template key (default: the configured default_template)
        #[arg(short, long)]
        template: Option<String>,

        /// Prefill from a resume listing (JSON)
        #[arg(long, value_name = "FILE")]
        from_resume: Option<PathBuf>,
    },

    /// List drafts, most recently updated first
    List,

    /// Show one draft
    Show {
        /// Draft id
        id: String,
    },

    /// Set a field in a draft's data (e.g., about.name, experience.0.role)
    Set {
        /// Draft id
        id: String,

        /// Dotted field path
        path: String,

        /// New value; chips fields take a comma separated list
        value: String,

        /// Parse the value as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set or remove a theme override (e.g., --accent)
    Theme {
        /// Draft id
        id: String,

        /// Theme variable; a leading `--` is optional
        #[arg(allow_hyphen_values = true)]
        var: String,

        /// Value to set
        value: Option<String>,

        /// Remove the override instead of setting it
        #[arg(long, conflicts_with = "value")]
        unset: bool,
    },

    /// Change a draft's title
    Rename {
        /// Draft id
        id: String,

        /// New title
        title: String,
    },

    /// Move a draft to another template, keeping its data
    Switch {
        /// Draft id
        id: String,

        /// Template key
        template: String,
    },

    /// Edit a draft's data as JSON in your editor
    Edit {
        /// Draft id
        id: String,
    },

    /// Prefill a draft from the latest resume in a listing
    Import {
        /// Draft id
        id: String,

        /// Resume listing (JSON array or {"resumes": [...]})
        file: PathBuf,

        /// Replace data even if the draft already has content
        #[arg(long)]
        overwrite: bool,
    },

    /// Publish a draft and print its public address
    Publish {
        /// Draft id
        id: String,
    },

    /// Show the public page served at a slug
    View {
        /// Slug (or, for local previews, a raw draft id)
        slug: String,
    },
}
