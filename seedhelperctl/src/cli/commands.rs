//! CLI command and subcommand definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SeedHelper settings CLI
#[derive(Parser, Debug)]
#[command(name = "seedhelperctl")]
#[command(version, about = "SeedHelper settings CLI", long_about = None)]
pub struct Cli {
    /// Daemon control URL (overrides config file)
    #[arg(short, long)]
    pub daemon: Option<String>,

    /// Output format (overrides config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose logging (overrides config file)
    #[arg(short, long)]
    pub verbose: Option<bool>,

    /// Don't load the CLI config file
    #[arg(long)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty table output
    Table,
    /// JSON output
    Json,
}

impl From<&OutputFormat> for crate::format::OutputFormat {
    fn from(format: &OutputFormat) -> Self {
        match format {
            OutputFormat::Table => crate::format::OutputFormat::Table,
            OutputFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show configuration status
    Status,

    /// Show or edit server connection settings
    Server {
        #[command(subcommand)]
        command: ServerCommands,
    },

    /// Test the connection to the configured server
    Test {
        /// Probe the server directly instead of through the daemon
        #[arg(long)]
        direct: bool,
    },

    /// Manage upload location presets
    Location {
        #[command(subcommand)]
        command: LocationCommands,
    },

    /// Export the full configuration to a JSON file
    Export {
        /// Output path (default: seedhelper-config.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a configuration JSON file, replacing the stored one
    Import {
        /// Path to the configuration file
        path: PathBuf,
    },

    /// Fetch a torrent link and upload it to the server
    Upload {
        /// URL of the torrent file
        url: String,

        /// Upload location id (default: the active location)
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ServerCommands {
    /// Show the saved server settings
    Show,

    /// Update server settings (persisted on this explicit save)
    Set {
        /// Base URL of the ruTorrent installation
        #[arg(long)]
        url: Option<String>,

        /// Basic auth username
        #[arg(long)]
        username: Option<String>,

        /// Basic auth password
        #[arg(long)]
        password: Option<String>,

        /// Enable or disable Basic auth
        #[arg(long, value_enum)]
        auth: Option<AuthToggle>,
    },
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum AuthToggle {
    On,
    Off,
}

#[derive(Subcommand, Debug)]
pub enum LocationCommands {
    /// List all upload locations
    List,

    /// Add a new location (empty directory and label, inactive)
    Add,

    /// Remove a location; the last remaining one cannot be removed
    Remove {
        /// Location id
        id: String,
    },

    /// Edit a location's directory and/or label (persisted immediately)
    Set {
        /// Location id
        id: String,

        /// Server-side directory; empty string for the server default
        #[arg(long)]
        directory: Option<String>,

        /// Category label; empty string for none
        #[arg(long)]
        label: Option<String>,
    },

    /// Mark a location active, deactivating all others
    Activate {
        /// Location id
        id: String,
    },
}
