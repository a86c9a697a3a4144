//! CLI command implementations.
//!
//! Contains the business logic for each CLI command: reading a batch from
//! a file or stdin, applying the sliding window, running the classifier,
//! and delegating to the output formatters.

use crate::cli::output::{self, OutputFormat};
use crate::cli::parser::{Cli, Commands};
use crate::core::{ChatMessage, from_loose_slice};
use crate::engine::Classifier;
use crate::error::{CommandError, IngestError, Result};
use crate::window::MessageWindow;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Classify {
            input,
            window,
            samples,
        } => cmd_classify(input, *window, *samples, format),
        Commands::Summarize { input, window } => cmd_summarize(input, *window, format),
        Commands::Rules => Ok(output::format_rules(format)),
    }
}

fn cmd_classify(
    input: &Path,
    window: usize,
    samples: usize,
    format: OutputFormat,
) -> Result<String> {
    let messages = load_window(input, window)?;
    let result = Classifier::with_sample_limit(samples).classify(&messages);
    tracing::debug!(
        processed = result.processed_count,
        buckets = result.buckets.len(),
        "classified window"
    );
    output::format_classify(&result, format)
}

fn cmd_summarize(input: &Path, window: usize, format: OutputFormat) -> Result<String> {
    let messages = load_window(input, window)?;
    let result = Classifier::new().classify(&messages);
    output::format_summary(&result, format)
}

/// Reads, parses, and windows the input batch.
fn load_window(input: &Path, capacity: usize) -> Result<Vec<ChatMessage>> {
    let raw = read_input(input)?;
    let (messages, dropped) = parse_messages(&raw)?;
    if dropped > 0 {
        tracing::debug!(dropped, "dropped malformed input items");
    }

    let mut window = MessageWindow::with_capacity(capacity)?;
    window.extend(messages);
    Ok(window.snapshot())
}

/// Reads the input file, or stdin when the path is `-`.
fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CommandError::ReadFailed {
                path: "<stdin>".to_string(),
                reason: e.to_string(),
            })?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input).map_err(|e| {
            CommandError::ReadFailed {
                path: input.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Parses a JSON array or NDJSON stream into validated messages.
///
/// Returns the messages plus the number of dropped malformed items; a
/// document that is valid JSON but not an array is rejected as a whole.
fn parse_messages(raw: &str) -> Result<(Vec<ChatMessage>, usize)> {
    let trimmed = raw.trim_start();
    if trimmed.is_empty() {
        return Ok((Vec::new(), 0));
    }

    if trimmed.starts_with('[') {
        let value: Value = serde_json::from_str(trimmed).map_err(IngestError::from)?;
        let Value::Array(items) = value else {
            return Err(IngestError::NotASequence.into());
        };
        return Ok(from_loose_slice(&items));
    }

    // NDJSON: one object per line, unparseable lines dropped like any
    // other malformed item
    let mut values = Vec::new();
    let mut dropped = 0;
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(value) => values.push(value),
            Err(_) => dropped += 1,
        }
    }
    let (messages, invalid) = from_loose_slice(&values);
    Ok((messages, dropped + invalid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_messages_json_array() {
        let (messages, dropped) =
            parse_messages(r#"[{"text": "hi"}, {"text": "there"}]"#).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(dropped, 0);
    }

    #[test]
    fn test_parse_messages_ndjson() {
        let input = "{\"text\": \"one\"}\n{\"text\": \"two\"}\nnot json\n";
        let (messages, dropped) = parse_messages(input).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn test_parse_messages_rejects_non_array_json() {
        let result = parse_messages(r#"{"text": "lone object... with [brackets]"}"#);
        // An object is NDJSON-parsed line by line, so this succeeds; only
        // a document starting with '[' that is not an array fails.
        assert!(result.is_ok());

        let result = parse_messages("[1, 2");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_messages_empty_input() {
        let (messages, dropped) = parse_messages("").unwrap();
        assert!(messages.is_empty());
        assert_eq!(dropped, 0);

        let (messages, _) = parse_messages("   \n  ").unwrap();
        assert!(messages.is_empty());
    }

    #[test]
    fn test_parse_messages_array_with_bad_items() {
        let input = r#"[{"text": "ok"}, {"nope": 1}, {"text": "   "}]"#;
        let (messages, dropped) = parse_messages(input).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(dropped, 2);
    }

    #[test]
    fn test_execute_rules() {
        let cli = Cli {
            verbose: false,
            format: "text".to_string(),
            command: Commands::Rules,
        };
        let out = execute(&cli).unwrap();
        assert!(out.contains("Questions"));
    }
}
