//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ctd_l10n::Language;

/// Contact diary tool.
///
/// Reads a diary snapshot exported by the upstream store and renders
/// per-day risk summaries, plain-text exports, and the venue catalogue.
#[derive(Debug, Parser)]
#[command(name = "ctd", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured language (en, de).
    #[arg(short, long, global = true)]
    pub lang: Option<Language>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the per-day risk summary with diary entries.
    Overview {
        /// Path to the diary snapshot (defaults to the configured path).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Limit output to the most recent N days.
        #[arg(long)]
        days: Option<usize>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Export the diary as plain text for the health authority.
    Export {
        /// Path to the diary snapshot (defaults to the configured path).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the venues in the trace-location catalogue.
    Locations {
        /// Path to the diary snapshot (defaults to the configured path).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
