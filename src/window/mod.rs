//! Bounded sliding window of recent chat messages.
//!
//! The window is the only mutable state in the pipeline and it lives
//! here, with its single owner, never in module-level globals. On every
//! batch the host pushes the new messages and re-submits the whole window
//! to the engine; re-classification is full, not incremental, which keeps
//! correctness trivial at O(window) per call.

use crate::core::ChatMessage;
use crate::error::{Error, Result};
use std::collections::VecDeque;

/// Default maximum number of retained messages.
pub const DEFAULT_WINDOW_CAPACITY: usize = 100;

/// Bounded FIFO window over the most recent chat messages.
///
/// # Examples
///
/// ```
/// use streamlens::core::ChatMessage;
/// use streamlens::window::MessageWindow;
///
/// let mut window = MessageWindow::new();
/// window.push(ChatMessage::new("hi", "a", 0).unwrap());
/// assert_eq!(window.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MessageWindow {
    capacity: usize,
    messages: VecDeque<ChatMessage>,
}

impl MessageWindow {
    /// Creates a window with [`DEFAULT_WINDOW_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_WINDOW_CAPACITY,
            messages: VecDeque::with_capacity(DEFAULT_WINDOW_CAPACITY),
        }
    }

    /// Creates a window with an explicit capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a zero capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::Config {
                message: "window capacity must be > 0".to_string(),
            });
        }
        Ok(Self {
            capacity,
            messages: VecDeque::with_capacity(capacity),
        })
    }

    /// Appends one message, evicting the oldest when full.
    pub fn push(&mut self, msg: ChatMessage) {
        if self.messages.len() == self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(msg);
    }

    /// Appends a batch in order, evicting oldest messages as needed.
    pub fn extend(&mut self, batch: impl IntoIterator<Item = ChatMessage>) {
        for msg in batch {
            self.push(msg);
        }
    }

    /// Returns an ordered copy of the window contents.
    ///
    /// The engine receives this immutable snapshot by value; the window
    /// itself is never handed out for mutation.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.iter().cloned().collect()
    }

    /// Iterates the window oldest-first without copying.
    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    /// Number of retained messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the window holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Maximum number of retained messages.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all messages.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Default for MessageWindow {
    fn default() -> Self {
        Self::new()
    }
}
