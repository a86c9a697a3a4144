//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::ClusterResult;
use crate::error::{Error, Result};
use crate::render::{render_json, render_numbered};
use crate::rules::RULES;
use crate::summary::summarize;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a classification result.
///
/// Text output is the numbered-list contract; JSON output is the
/// structured result.
pub fn format_classify(result: &ClusterResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            if result.is_empty() {
                return Ok("No messages to classify.\n".to_string());
            }
            Ok(render_numbered(result))
        }
        OutputFormat::Json => Ok(format!("{}\n", render_json(result)?)),
    }
}

/// Formats a fallback summary of a classification result.
pub fn format_summary(result: &ClusterResult, format: OutputFormat) -> Result<String> {
    let summary = summarize(result);
    match format {
        OutputFormat::Text => Ok(format!("{summary}\n")),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct SummaryOutput<'a> {
                summary: &'a str,
                processed_count: usize,
            }
            let json = serde_json::to_string_pretty(&SummaryOutput {
                summary: &summary,
                processed_count: result.processed_count,
            })
            .map_err(crate::error::RenderError::from)?;
            Ok(format!("{json}\n"))
        }
    }
}

/// Formats the category rule table.
#[must_use]
pub fn format_rules(format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_rules_text(),
        OutputFormat::Json => format_rules_json(),
    }
}

fn format_rules_text() -> String {
    let mut output = String::new();
    output.push_str("Categories (precedence order):\n");
    let _ = writeln!(output, "{:<4} {:<14} Cues", "#", "Label");
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for (index, rule) in RULES.iter().enumerate() {
        let _ = writeln!(
            output,
            "{:<4} {:<14} {}",
            index + 1,
            rule.label(),
            rule.cues().join(", ")
        );
    }
    output
}

fn format_rules_json() -> String {
    #[derive(Serialize)]
    struct RuleInfo {
        precedence: usize,
        label: &'static str,
        cues: Vec<String>,
    }

    let rules: Vec<RuleInfo> = RULES
        .iter()
        .enumerate()
        .map(|(index, rule)| RuleInfo {
            precedence: index,
            label: rule.label(),
            cues: rule.cues(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&rules).unwrap_or_else(|_| "[]".to_string());
    format!("{json}\n")
}

/// Formats an error for the selected output format.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => serde_json::json!({ "error": err.to_string() }).to_string(),
    }
}
