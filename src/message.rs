//! One sender turn from a chat export.
//!
//! [`RawMessage`] borrows its text from the export; it only lives while the
//! pipeline walks the input and is never stored past segmentation.
//!
//! # Example
//!
//! ```
//! use catalogpack::RawMessage;
//!
//! let msg = RawMessage::new(0, "B30 Gold Epsom GHW Stamp W").with_sender("Front Row");
//! assert_eq!(msg.sender(), Some("Front Row"));
//! assert_eq!(msg.lines().count(), 1);
//! ```

use chrono::NaiveDateTime;
use serde::Serialize;

/// A contiguous span of the export attributed to one sender turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawMessage<'a> {
    /// 0-based position among the messages of the export.
    pub index: usize,

    /// Sender name from the chat prefix.
    ///
    /// `None` when the export had no recognizable prefixes and the whole input
    /// was taken as a single message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<&'a str>,

    /// When the message was sent, if the prefix carried a valid date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,

    /// Message body with surrounding whitespace trimmed.
    pub text: &'a str,
}

impl<'a> RawMessage<'a> {
    /// Creates a message with no sender or timestamp.
    pub fn new(index: usize, text: &'a str) -> Self {
        Self {
            index,
            sender: None,
            timestamp: None,
            text,
        }
    }

    /// Builder method to set the sender.
    #[must_use]
    pub fn with_sender(mut self, sender: &'a str) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Builder method to set the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: NaiveDateTime) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Returns the sender name, if known.
    pub fn sender(&self) -> Option<&'a str> {
        self.sender
    }

    /// Returns the message body.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Iterates over the body lines, untrimmed.
    pub fn lines(&self) -> std::str::Lines<'a> {
        self.text.lines()
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
