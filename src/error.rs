//! Error types for streamlens operations.
//!
//! This module provides the error hierarchy using `thiserror` for the
//! ingest boundary, rendering, and CLI commands. Classification itself is
//! total and has no error path.

use thiserror::Error;

/// Result type alias for streamlens operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for streamlens operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Ingest-boundary errors (malformed or structurally broken input).
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// Rendering errors (output serialization).
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Errors raised while validating raw input at the engine boundary.
///
/// A malformed *item* is dropped by the batch helpers rather than failing
/// the whole batch; these variants surface from the single-item constructor
/// and from structurally broken input, which is fatal to that call.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Item has no usable `text` field.
    #[error("message {index} has a missing or non-string text field")]
    MissingText {
        /// Zero-based position of the offending item.
        index: usize,
    },

    /// Text is empty after trimming.
    #[error("message text is empty after trimming")]
    EmptyText,

    /// The whole input is not a sequence of messages.
    #[error("input is not a sequence of messages")]
    NotASequence,

    /// Input could not be parsed as JSON.
    #[error("malformed JSON input: {0}")]
    Json(String),
}

/// Rendering-specific errors.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Serialization to JSON failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Failed to read an input file.
    #[error("failed to read input: {path}: {reason}")]
    ReadFailed {
        /// Path to the input.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Io(String),
}

// Implement From traits for standard library and serde errors

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Command(CommandError::Io(err.to_string()))
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
