//! The classification engine: folds a message window into bucket
//! statistics in one pass.
//!
//! The engine is stateless and side-effect-free. Each call is a pure,
//! total function from an ordered message sequence to a [`ClusterResult`];
//! it performs no I/O, never suspends, and holds no state between calls,
//! so it is safe to invoke repeatedly from a host loop or from multiple
//! threads concurrently. All windowing state lives with the caller (see
//! [`crate::window`]).

use crate::core::{ChatMessage, ClusterBucket, ClusterResult, from_loose_slice};
use crate::rules::{CATEGORY_COUNT, Category, match_category};
use crate::text::normalize;
use serde_json::Value;

/// Default number of representative samples retained per bucket.
pub const DEFAULT_SAMPLE_LIMIT: usize = 3;

/// Stateless classifier over chat message windows.
///
/// # Examples
///
/// ```
/// use streamlens::core::ChatMessage;
/// use streamlens::engine::Classifier;
///
/// let window = vec![
///     ChatMessage::new("how do I install this?", "a", 0).unwrap(),
///     ChatMessage::new("great stream!", "b", 1).unwrap(),
/// ];
/// let result = Classifier::new().classify(&window);
/// assert_eq!(result.processed_count, 2);
/// assert_eq!(result.main_focus().unwrap().label, "Questions");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    /// Per-bucket cap on retained sample texts.
    sample_limit: usize,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Creates a classifier with the default sample limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }

    /// Creates a classifier retaining up to `limit` samples per bucket.
    #[must_use]
    pub const fn with_sample_limit(limit: usize) -> Self {
        Self { sample_limit: limit }
    }

    /// Classifies an ordered window of messages.
    ///
    /// One pass over the input: blank texts are skipped, every remaining
    /// message is normalized, matched against the rule table, counted, and
    /// its first occurrences retained as raw-text samples. Empty buckets
    /// are discarded and the rest sorted by descending count; the sort is
    /// stable, so equal counts keep rule-table precedence order. An empty
    /// window yields [`ClusterResult::empty`], which callers treat as "no
    /// data yet", not an error.
    #[must_use]
    pub fn classify(&self, messages: &[ChatMessage]) -> ClusterResult {
        let mut counts = [0_usize; CATEGORY_COUNT];
        let mut samples: [Vec<String>; CATEGORY_COUNT] = std::array::from_fn(|_| Vec::new());
        let mut processed = 0_usize;

        for msg in messages {
            if msg.is_blank() {
                continue;
            }
            processed += 1;

            let normalized = normalize(&msg.text);
            let category = match_category(&normalized);
            let slot = category.precedence();

            counts[slot] += 1;
            if samples[slot].len() < self.sample_limit {
                // Samples keep the raw text, not the normalized form
                samples[slot].push(msg.text.clone());
            }
        }

        let mut buckets: Vec<ClusterBucket> = Category::ALL
            .into_iter()
            .zip(samples)
            .filter(|(category, _)| counts[category.precedence()] > 0)
            .map(|(category, sample_messages)| ClusterBucket {
                label: category.label().to_string(),
                count: counts[category.precedence()],
                sample_messages,
            })
            .collect();

        // Stable sort: ties keep the precedence order established above
        buckets.sort_by(|a, b| b.count.cmp(&a.count));

        ClusterResult {
            buckets,
            processed_count: processed,
        }
    }

    /// Classifies loosely-typed message objects.
    ///
    /// Items with a missing or non-string `text`, or text that is blank
    /// after trimming, are dropped rather than failing the batch.
    #[must_use]
    pub fn classify_loose(&self, values: &[Value]) -> ClusterResult {
        let (messages, _dropped) = from_loose_slice(values);
        self.classify(&messages)
    }
}

/// Classifies a window with the default [`Classifier`].
///
/// This is the engine's sole conceptual entry point; the struct form
/// exists for hosts that want a non-default sample limit.
#[must_use]
pub fn classify(messages: &[ChatMessage]) -> ClusterResult {
    Classifier::new().classify(messages)
}
