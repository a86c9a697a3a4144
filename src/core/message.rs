//! Chat message representation and ingest validation.
//!
//! A [`ChatMessage`] is one observed chat line. Messages are immutable once
//! created; the engine never mutates its input. Validation of loosely-typed
//! input (the message source is a browser-side scraper with no type
//! guarantees) happens here, at the boundary, so everything downstream can
//! trust the record shape.

use crate::error::IngestError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One observed chat line.
///
/// `author` and `timestamp` are best-effort and non-authoritative: the
/// author is retained for display only and the timestamp is used only for
/// ordering input, never for bucket identity.
///
/// # Examples
///
/// ```
/// use streamlens::core::ChatMessage;
///
/// let msg = ChatMessage::new("how do I install this?", "viewer42", 1_638_360_000_000).unwrap();
/// assert_eq!(msg.author, "viewer42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Raw message text, possibly containing emotes or markup as plain text.
    pub text: String,

    /// Display name of the sender.
    #[serde(default)]
    pub author: String,

    /// Milliseconds since epoch. Not guaranteed monotonic across batches.
    #[serde(default)]
    pub timestamp: i64,
}

impl ChatMessage {
    /// Creates a validated message.
    ///
    /// The text is kept raw (untrimmed) but must be non-empty after trim.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::EmptyText`] if `text` trims to nothing.
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        timestamp: i64,
    ) -> std::result::Result<Self, IngestError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(IngestError::EmptyText);
        }
        Ok(Self {
            text,
            author: author.into(),
            timestamp,
        })
    }

    /// Builds a message from a loosely-typed JSON object.
    ///
    /// `text` must be a non-empty string; `author` and `timestamp` default
    /// when missing or mistyped. Float timestamps (a JS `Date.now()` that
    /// went through arithmetic) are truncated to integer milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::MissingText`] when `text` is absent or not a
    /// string, [`IngestError::EmptyText`] when it trims to nothing.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_loose(value: &Value, index: usize) -> std::result::Result<Self, IngestError> {
        let Some(text) = value.get("text").and_then(Value::as_str) else {
            return Err(IngestError::MissingText { index });
        };
        let author = value
            .get("author")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let timestamp = value.get("timestamp").map_or(0, |ts| {
            ts.as_i64().unwrap_or_else(|| {
                ts.as_f64().map_or(0, |f| f as i64)
            })
        });
        Self::new(text, author, timestamp)
    }

    /// Returns the text with outer whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Whether the message carries no visible text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

/// Converts a slice of loose JSON values into validated messages.
///
/// Malformed items are dropped rather than failing the whole batch,
/// preserving partial progress. Returns the surviving messages and the
/// number of dropped items so hosts can report them.
#[must_use]
pub fn from_loose_slice(values: &[Value]) -> (Vec<ChatMessage>, usize) {
    let mut messages = Vec::with_capacity(values.len());
    let mut dropped = 0;
    for (index, value) in values.iter().enumerate() {
        match ChatMessage::from_loose(value, index) {
            Ok(msg) => messages.push(msg),
            Err(_) => dropped += 1,
        }
    }
    (messages, dropped)
}

/// Parses a JSON document into a validated message batch.
///
/// Accepts a JSON array of message objects. Malformed items are dropped
/// per-item; a document that is valid JSON but not an array is rejected as
/// a whole, as is a document that is not valid JSON.
///
/// # Errors
///
/// Returns [`IngestError::Json`] for unparseable input and
/// [`IngestError::NotASequence`] when the top-level value is not an array.
pub fn parse_batch(input: &str) -> std::result::Result<Vec<ChatMessage>, IngestError> {
    let value: Value = serde_json::from_str(input)?;
    let Value::Array(items) = value else {
        return Err(IngestError::NotASequence);
    };
    let (messages, _dropped) = from_loose_slice(&items);
    Ok(messages)
}
