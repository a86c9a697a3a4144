//! Core domain models for streamlens.
//!
//! This module contains the fundamental data structures used throughout the
//! engine: chat messages and classification buckets. These are pure domain
//! models with no I/O dependencies.

pub mod bucket;
pub mod message;

pub use bucket::{ClusterBucket, ClusterResult};
pub use message::{ChatMessage, from_loose_slice, parse_batch};
