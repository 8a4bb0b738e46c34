//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "titledb")]
#[command(about = "Group console title database records into per-title catalogs", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Locations of the two database inputs.
#[derive(Args, Clone, Default)]
pub(crate) struct SourceArgs {
    /// Title metadata JSON (defaults to settings, then ./titles.json)
    #[arg(long, global = true)]
    pub titles: Option<PathBuf>,

    /// Update version history JSON (defaults to settings, then ./versions.json)
    #[arg(long, global = true)]
    pub versions: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build the catalog and print summary counts
    Stats {
        /// List every rejected title ID
        #[arg(long)]
        rejected: bool,
    },

    /// Show the title that a base, update or DLC ID belongs to
    Show {
        /// Title ID (any case)
        id: String,
    },

    /// Decode title IDs without loading any database
    Classify {
        /// One or more title IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Manage saved source paths
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show saved settings and resolved source paths
    Show,

    /// Print the settings file path
    Path,

    /// Save the --titles/--versions paths for later runs
    SetSources,

    /// Remove saved source paths
    Clear,
}
