//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// confsync - Sync versioned JSON configuration with a remote service
#[derive(Parser, Debug)]
#[command(name = "confsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Root directory of the local configuration store
    #[arg(long, global = true, env = "CONFSYNC_ROOT", default_value = "configs")]
    pub root: PathBuf,

    /// Endpoint settings file (defaults to the user config directory)
    #[arg(long, global = true, env = "CONFSYNC_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fetch the latest configuration of a project
    ///
    /// Examples:
    ///   confsync pull atlas
    ///   confsync pull atlas --env staging
    Pull {
        /// Project name
        project: String,

        /// Environment to pull from (server default when omitted)
        #[arg(short, long)]
        env: Option<String>,
    },

    /// Validate and publish a local configuration file
    ///
    /// The file must be named <project>@<version>.json.
    Push {
        /// Path to the document
        file: PathBuf,

        /// Environment to publish to
        #[arg(short, long)]
        env: Option<String>,
    },

    /// Fetch one exact version of a project
    Checkout {
        /// Project name
        project: String,

        /// Version to fetch
        version: String,

        /// Environment to fetch from
        #[arg(short, long)]
        env: Option<String>,
    },

    /// Republish a locally stored version as the latest
    Revert {
        /// Project name
        project: String,

        /// Locally stored version to republish
        version: String,

        /// Environment the version is stored under
        #[arg(short, long)]
        env: Option<String>,

        /// Answer yes to the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List locally stored configurations
    List {
        /// Only show this project
        project: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Configure the remote endpoint
    ///
    /// Prompts for missing values when run without --api.
    Init {
        /// Base URL of the configuration service
        #[arg(long)]
        api: Option<String>,

        /// Authentication token
        #[arg(long)]
        token: Option<String>,
    },

    /// Show the structural differences between two documents
    Diff {
        /// Original document
        old: PathBuf,

        /// Updated document
        new: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Create the folder for a named environment of a project
    Env {
        /// Project name
        project: String,

        /// Environment name
        environment: String,
    },
}
