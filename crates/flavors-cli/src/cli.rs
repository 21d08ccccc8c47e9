//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Flavor text analytics.
///
/// Records the status phrases piped in on stdin (e.g. "Thinking... Moonwalking...")
/// and summarizes how often each one appeared.
#[derive(Debug, Parser)]
#[command(name = "cc-flavors", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the event database (overrides config).
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    // `None` runs `summary`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record flavor texts read from stdin, one line at a time.
    Ingest,

    /// Show how often each flavor text was seen.
    Summary {
        /// Only count events at or after this time (RFC 3339 or e.g. "2 days ago").
        #[arg(long, value_name = "WHEN")]
        since: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Delete all recorded flavor texts.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}
