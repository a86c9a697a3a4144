//! CLI layer for streamlens.
//!
//! Provides the command-line interface using clap, with commands for
//! classifying batches, summarizing them, and inspecting the rule table.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
