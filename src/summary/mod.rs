//! Rule-based fallback summarizer.
//!
//! A deterministic, non-learned text generator for hosts without an
//! LLM-backed summarizer. The structured path consumes [`ClusterResult`]
//! directly and is preferred; the text path exists for consumers that only
//! have the numbered-list rendering and goes through
//! [`crate::render::parse_numbered`].

use crate::core::ClusterResult;
use crate::render::parse_numbered;
use std::fmt::Write;

/// Summarizes a classification result (structured path).
///
/// Output is one short paragraph naming the main focus, the remaining
/// buckets with counts, and a representative sample when one exists.
///
/// # Examples
///
/// ```
/// use streamlens::core::ChatMessage;
/// use streamlens::engine::classify;
/// use streamlens::summary::summarize;
///
/// let window = vec![ChatMessage::new("how does this work?", "a", 0).unwrap()];
/// let text = summarize(&classify(&window));
/// assert!(text.starts_with("Main focus: Questions"));
/// ```
#[must_use]
pub fn summarize(result: &ClusterResult) -> String {
    let pairs: Vec<(String, usize)> = result
        .buckets
        .iter()
        .map(|b| (b.label.clone(), b.count))
        .collect();
    let mut text = compose(&pairs, result.processed_count);

    if let Some(sample) = result
        .main_focus()
        .and_then(|b| b.sample_messages.first())
    {
        let _ = write!(text, " Sample: \"{sample}\"");
    }
    text
}

/// Summarizes from a numbered-list rendering (text path).
///
/// Recovers `(label, count)` pairs with the lock-step parser; sample texts
/// are not available on this path.
#[must_use]
pub fn summarize_numbered(rendered: &str) -> String {
    let pairs = parse_numbered(rendered);
    let total = pairs.iter().map(|(_, count)| count).sum();
    compose(&pairs, total)
}

/// Builds the summary sentence from `(label, count)` pairs.
fn compose(pairs: &[(String, usize)], processed: usize) -> String {
    let Some((main_label, main_count)) = pairs.first() else {
        return "No chat activity yet.".to_string();
    };

    let mut text = format!(
        "Main focus: {main_label} ({main_count} of {processed} messages)."
    );

    if pairs.len() > 1 {
        let rest: Vec<String> = pairs[1..]
            .iter()
            .map(|(label, count)| format!("{label} ({count})"))
            .collect();
        let _ = write!(text, " Also active: {}.", rest.join(", "));
    }
    text
}
