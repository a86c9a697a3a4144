//! Text processing utilities: normalization and Unicode-aware display
//! helpers.

pub mod normalize;
pub mod unicode;

pub use normalize::normalize;
pub use unicode::{ellipsize, grapheme_count, truncate_graphemes};
