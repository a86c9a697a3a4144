//! # streamlens
//!
//! Live-stream chat triage engine.
//!
//! streamlens continuously classifies a sliding window of live chat
//! messages into a small set of actionable categories (Questions,
//! Issues/Bugs, Requests, General Chat), producing per category a running
//! count and a bounded set of representative samples. Classification is
//! lexical and rule-based, deterministic, and cheap enough to run on every
//! UI update.
//!
//! ## Features
//!
//! - **Stateless engine**: each call is a pure function over an ordered
//!   message window; all state lives in the caller's [`MessageWindow`]
//! - **Fixed rule table**: closed, ordered category set with
//!   first-match-wins semantics
//! - **Stable output contract**: numbered-list rendering with a lock-step
//!   parser for text-based consumers
//! - **Fallback summarizer**: deterministic, rule-based prose for hosts
//!   without an LLM

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod engine;
pub mod error;
pub mod render;
pub mod rules;
pub mod summary;
pub mod text;
pub mod window;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{ChatMessage, ClusterBucket, ClusterResult};

// Re-export engine types
pub use engine::{Classifier, DEFAULT_SAMPLE_LIMIT, classify};

// Re-export rule types
pub use rules::{CATEGORY_COUNT, Category, CategoryRule, RULES, match_category};

// Re-export rendering and summary entry points
pub use render::{parse_numbered, render_json, render_numbered};
pub use summary::{summarize, summarize_numbered};

// Re-export window types
pub use window::{DEFAULT_WINDOW_CAPACITY, MessageWindow};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
