//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name = "bidsite",
    version,
    about = "Build and inspect the bidsite article index",
    long_about = None
)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "BIDSITE_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Subcommand to execute. Defaults to `build`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Scan the content directory and write the index.
    Build {
        /// Content directory (overrides config).
        #[arg(long)]
        content_dir: Option<String>,

        /// Index file to write (overrides config).
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Report whether the index is out of date. Exits 1 when stale.
    Check {
        /// Content directory (overrides config).
        #[arg(long)]
        content_dir: Option<String>,

        /// Index file to check (overrides config).
        #[arg(long)]
        index: Option<String>,
    },

    /// Search indexed articles by title or excerpt.
    Search {
        /// Text to look for.
        query: String,

        /// Index file to search (overrides config).
        #[arg(long)]
        index: Option<String>,
    },

    /// Print the metadata extracted from one Markdown file as JSON.
    Meta {
        /// Markdown file to inspect.
        file: String,
    },

    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug, PartialEq, Eq)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Print the effective configuration as TOML.
    Show,

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },
}
