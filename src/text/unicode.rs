//! Unicode helpers for display truncation.
//!
//! Sample previews are truncated at grapheme cluster boundaries so emoji
//! and combining sequences are never cut in half. These helpers feed
//! display paths only, never classification.

use unicode_segmentation::UnicodeSegmentation;

/// Counts the number of grapheme clusters in a string.
///
/// # Examples
///
/// ```
/// use streamlens::text::grapheme_count;
///
/// assert_eq!(grapheme_count("Hello"), 5);
/// assert_eq!(grapheme_count("世界"), 2);
/// ```
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Truncates a string at a grapheme cluster boundary.
///
/// Returns a slice containing at most `max_graphemes` grapheme clusters.
#[must_use]
pub fn truncate_graphemes(s: &str, max_graphemes: usize) -> &str {
    let mut end_byte = 0;

    for (count, grapheme) in s.graphemes(true).enumerate() {
        if count >= max_graphemes {
            break;
        }
        end_byte += grapheme.len();
    }

    &s[..end_byte]
}

/// Truncates a string for display, appending `...` when shortened.
#[must_use]
pub fn ellipsize(s: &str, max_graphemes: usize) -> String {
    if grapheme_count(s) <= max_graphemes {
        s.to_string()
    } else {
        let kept = truncate_graphemes(s, max_graphemes.saturating_sub(3));
        format!("{kept}...")
    }
}
