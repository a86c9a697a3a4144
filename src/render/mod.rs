//! Textual and JSON rendering of classification results.
//!
//! The numbered-list form is a versioned serialization format, a private
//! protocol between the engine and text-based consumers (the fallback
//! summarizer re-parses it). [`render_numbered`] and [`parse_numbered`]
//! live side by side so the pair cannot drift apart: changing one without
//! the other is a breaking change.

use crate::core::ClusterResult;
use crate::error::RenderError;
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

/// Samples included under each numbered line.
pub const RENDERED_SAMPLE_LIMIT: usize = 2;

/// Header line shape produced by [`render_numbered`]. The parser is built
/// from this exact pattern; keep the two in lock-step.
#[allow(clippy::expect_used)]
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.\s+(.+)\s+\((\d+) messages\):$").expect("static pattern compiles")
});

/// Renders a result as a deterministic, parseable numbered list.
///
/// Each bucket becomes a 1-based line of the exact shape
/// `"<n>. <label> (<count> messages):"`, in the result's sorted order (so
/// item 1 is always the main focus), followed by up to the first
/// [`RENDERED_SAMPLE_LIMIT`] samples as indented quoted lines.
///
/// # Examples
///
/// ```
/// use streamlens::core::ChatMessage;
/// use streamlens::engine::classify;
/// use streamlens::render::render_numbered;
///
/// let window = vec![ChatMessage::new("why is chat slow?", "a", 0).unwrap()];
/// let text = render_numbered(&classify(&window));
/// assert!(text.starts_with("1. Questions (1 messages):"));
/// ```
#[must_use]
pub fn render_numbered(result: &ClusterResult) -> String {
    let mut out = String::new();
    for (index, bucket) in result.buckets.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({} messages):",
            index + 1,
            bucket.label,
            bucket.count
        );
        for sample in bucket.sample_messages.iter().take(RENDERED_SAMPLE_LIMIT) {
            let _ = writeln!(out, "   \"{sample}\"");
        }
    }
    out
}

/// Recovers `(label, count)` pairs from a numbered-list rendering.
///
/// Lines that do not match the header shape (sample lines, prose) are
/// ignored, so the parser is safe to run over surrounding text.
#[must_use]
pub fn parse_numbered(text: &str) -> Vec<(String, usize)> {
    text.lines()
        .filter_map(|line| {
            let caps = HEADER_RE.captures(line.trim_end())?;
            let label = caps.get(2)?.as_str().to_string();
            let count = caps.get(3)?.as_str().parse().ok()?;
            Some((label, count))
        })
        .collect()
}

/// Renders a result as pretty-printed JSON (the structured path).
///
/// # Errors
///
/// Returns [`RenderError::Serialization`] if encoding fails.
pub fn render_json(result: &ClusterResult) -> std::result::Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClusterBucket;

    fn sample_result() -> ClusterResult {
        ClusterResult {
            buckets: vec![
                ClusterBucket {
                    label: "Questions".to_string(),
                    count: 3,
                    sample_messages: vec![
                        "how do I install?".to_string(),
                        "what map is this?".to_string(),
                        "why though?".to_string(),
                    ],
                },
                ClusterBucket {
                    label: "Issues/Bugs".to_string(),
                    count: 1,
                    sample_messages: vec!["stream is broken".to_string()],
                },
            ],
            processed_count: 4,
        }
    }

    #[test]
    fn test_render_numbered_shape() {
        let text = render_numbered(&sample_result());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "1. Questions (3 messages):");
        assert_eq!(lines[1], "   \"how do I install?\"");
        assert_eq!(lines[2], "   \"what map is this?\"");
        // Third sample is not rendered
        assert_eq!(lines[3], "2. Issues/Bugs (1 messages):");
        assert_eq!(lines[4], "   \"stream is broken\"");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_render_numbered_empty() {
        assert_eq!(render_numbered(&ClusterResult::empty()), "");
    }

    #[test]
    fn test_parse_recovers_pairs() {
        let text = render_numbered(&sample_result());
        let pairs = parse_numbered(&text);
        assert_eq!(
            pairs,
            vec![
                ("Questions".to_string(), 3),
                ("Issues/Bugs".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_parse_ignores_sample_and_prose_lines() {
        let text = "summary follows\n1. Requests (2 messages):\n   \"please\"\ntrailing note\n";
        let pairs = parse_numbered(text);
        assert_eq!(pairs, vec![("Requests".to_string(), 2)]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_numbered("").is_empty());
        assert!(parse_numbered("no headers here").is_empty());
    }

    #[test]
    fn test_parse_label_with_slash() {
        let pairs = parse_numbered("1. Issues/Bugs (7 messages):");
        assert_eq!(pairs, vec![("Issues/Bugs".to_string(), 7)]);
    }

    #[test]
    fn test_render_json_round_trips() {
        let result = sample_result();
        let json = render_json(&result).unwrap();
        let back: ClusterResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
