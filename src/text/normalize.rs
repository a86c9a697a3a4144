//! Text canonicalization for rule matching.
//!
//! Rule matching depends on the exact normalization policy, so it is part
//! of the engine's versioned contract:
//!
//! - Unicode lower-casing via [`str::to_lowercase`]; characters with no
//!   lowercase mapping pass through unchanged.
//! - Leading and trailing whitespace removed, internal whitespace runs
//!   (anything [`char::is_whitespace`]) collapsed to a single ASCII space.
//!
//! Normalization is total: it never fails, and malformed or unusual input
//! is treated as opaque text.

/// Produces the canonical matching form of a message text.
///
/// # Examples
///
/// ```
/// use streamlens::text::normalize;
///
/// assert_eq!(normalize("  How  DO\tI install?  "), "how do i install?");
/// assert_eq!(normalize("ÜBER cool"), "über cool");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        for c in word.chars() {
            out.extend(c.to_lowercase());
        }
    }
    out
}
