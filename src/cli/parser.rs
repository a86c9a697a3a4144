//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// streamlens: live-stream chat triage.
///
/// Classifies a window of chat messages into actionable categories and
/// renders counts with representative samples.
#[derive(Parser, Debug)]
#[command(name = "streamlens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a batch of chat messages.
    ///
    /// Reads a JSON array or NDJSON stream of `{text, author, timestamp}`
    /// objects and prints the bucket breakdown.
    Classify {
        /// Input file; use '-' for stdin.
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Sliding-window capacity applied before classification.
        #[arg(short, long, default_value = "100")]
        window: usize,

        /// Representative samples retained per bucket.
        #[arg(short, long, default_value = "3")]
        samples: usize,
    },

    /// Print a rule-based natural-language summary of a batch.
    Summarize {
        /// Input file; use '-' for stdin.
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Sliding-window capacity applied before classification.
        #[arg(short, long, default_value = "100")]
        window: usize,
    },

    /// List the category rule table in precedence order.
    Rules,
}
