//! Aggregated classification output.
//!
//! A [`ClusterBucket`] is the aggregate for one category; a
//! [`ClusterResult`] is the full output of one classification call. Both
//! are created fresh on every call and never retained by the engine.

use serde::{Deserialize, Serialize};

/// Aggregated result for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterBucket {
    /// Display name of the category. Opaque text for consumers: a UI must
    /// escape it before rendering, the engine never does.
    pub label: String,

    /// Number of window messages assigned to this bucket.
    pub count: usize,

    /// Up to K representative raw texts, in first-seen order.
    pub sample_messages: Vec<String>,
}

impl ClusterBucket {
    /// Creates a bucket with the given label and no contents yet.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            count: 0,
            sample_messages: Vec::new(),
        }
    }
}

/// Full output of one classification call.
///
/// Buckets are ordered by descending count, ties broken by the static rule
/// precedence, so the first bucket is always the largest ("main focus").
/// Zero-count buckets are never present; consumers treat absence as zero.
///
/// # Examples
///
/// ```
/// use streamlens::core::ClusterResult;
///
/// let result = ClusterResult::empty();
/// assert!(result.is_empty());
/// assert_eq!(result.processed_count, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterResult {
    /// Non-empty buckets in display order.
    pub buckets: Vec<ClusterBucket>,

    /// Number of messages classified in this call, after empty-text
    /// filtering. Always equals the sum of bucket counts.
    pub processed_count: usize,
}

impl ClusterResult {
    /// Creates the well-formed "no data yet" result.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            buckets: Vec::new(),
            processed_count: 0,
        }
    }

    /// Whether the call saw no classifiable messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The largest bucket, if any.
    #[must_use]
    pub fn main_focus(&self) -> Option<&ClusterBucket> {
        self.buckets.first()
    }

    /// Looks up a bucket by label.
    #[must_use]
    pub fn bucket(&self, label: &str) -> Option<&ClusterBucket> {
        self.buckets.iter().find(|b| b.label == label)
    }

    /// Sum of all bucket counts.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ClusterResult {
        ClusterResult {
            buckets: vec![
                ClusterBucket {
                    label: "Questions".to_string(),
                    count: 3,
                    sample_messages: vec!["why?".to_string()],
                },
                ClusterBucket {
                    label: "General Chat".to_string(),
                    count: 1,
                    sample_messages: vec!["hi".to_string()],
                },
            ],
            processed_count: 4,
        }
    }

    #[test]
    fn test_empty_result() {
        let result = ClusterResult::empty();
        assert!(result.is_empty());
        assert!(result.main_focus().is_none());
        assert_eq!(result.total_count(), 0);
    }

    #[test]
    fn test_main_focus_is_first_bucket() {
        let result = sample_result();
        assert_eq!(result.main_focus().unwrap().label, "Questions");
    }

    #[test]
    fn test_bucket_lookup() {
        let result = sample_result();
        assert_eq!(result.bucket("General Chat").unwrap().count, 1);
        assert!(result.bucket("Requests").is_none());
    }

    #[test]
    fn test_total_count_matches_processed() {
        let result = sample_result();
        assert_eq!(result.total_count(), result.processed_count);
    }

    #[test]
    fn test_result_serialization() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let back: ClusterResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_bucket_new() {
        let bucket = ClusterBucket::new("Requests");
        assert_eq!(bucket.label, "Requests");
        assert_eq!(bucket.count, 0);
        assert!(bucket.sample_messages.is_empty());
    }
}
