//! WhatsApp export splitting.
//!
//! Stock lists are forwarded from WhatsApp on iOS, where every message starts
//! with a bracketed prefix:
//!
//! ```text
//! [9:41, 7/8/2025] Front Row: B30 Gold Epsom GHW Stamp W
//! ```
//!
//! The prefix is matched anywhere in the text, not only at line start, since
//! copy-pasted exports sometimes glue two messages onto one line.

use chrono::NaiveDateTime;
use regex::{CaptureMatches, Regex};

use crate::error::Result;
use crate::message::RawMessage;

/// `[H:MM, D/M/YYYY] Sender: `
const BOUNDARY_PATTERN: &str = r"\[(\d{1,2}:\d{2}), (\d{1,2}/\d{1,2}/\d{4})\] ([^:]+): ";

/// Accepted layouts for the prefix date and time.
const TIMESTAMP_FORMATS: &[&str] = &["%d/%m/%Y %H:%M"];

/// Parse timestamp from the prefix date and time strings.
///
/// Returns `None` for impossible dates such as `31/2/2025`.
pub fn parse_chat_timestamp(date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
    let datetime_str = format!("{date_str} {time_str}");

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&datetime_str, format).ok())
}

/// Splits an export into per-message spans.
///
/// # Example
///
/// ```rust
/// use catalogpack::parsing::MessageSplitter;
///
/// let splitter = MessageSplitter::new()?;
/// let input = "[9:41, 7/8/2025] Ana: K25 Gold Togo GHW\n[9:42, 7/8/2025] Ana: B30 Noir Epsom PHW";
/// let messages: Vec<_> = splitter.split(input).collect();
///
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[1].text, "B30 Noir Epsom PHW");
/// # Ok::<(), catalogpack::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MessageSplitter {
    boundary: Regex,
}

impl MessageSplitter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            boundary: Regex::new(BOUNDARY_PATTERN)?,
        })
    }

    /// Returns a lazy iterator over the messages of `input`, in order.
    ///
    /// Text before the first prefix is discarded and blank messages are
    /// skipped. When the input has no prefix at all, it is yielded whole as a
    /// single message without sender.
    pub fn split<'r, 'a>(&'r self, input: &'a str) -> Messages<'r, 'a> {
        let mut boundaries = self.boundary.captures_iter(input);
        let first = boundaries.next();
        let whole_input = first.is_none();

        Messages {
            input,
            boundaries,
            current: first,
            whole_input,
            yielded: 0,
        }
    }
}

/// Iterator returned by [`MessageSplitter::split`].
pub struct Messages<'r, 'a> {
    input: &'a str,
    boundaries: CaptureMatches<'r, 'a>,
    current: Option<regex::Captures<'a>>,
    whole_input: bool,
    yielded: usize,
}

impl<'a> Messages<'_, 'a> {
    fn emit(&mut self, message: RawMessage<'a>) -> RawMessage<'a> {
        self.yielded += 1;
        message
    }
}

impl<'a> Iterator for Messages<'_, 'a> {
    type Item = RawMessage<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.whole_input {
            self.whole_input = false;
            let text = self.input.trim();
            if text.is_empty() {
                return None;
            }
            let message = RawMessage::new(self.yielded, text);
            return Some(self.emit(message));
        }

        while let Some(caps) = self.current.take() {
            self.current = self.boundaries.next();

            let body_start = caps.get(0).map_or(0, |m| m.end());
            let body_end = self
                .current
                .as_ref()
                .and_then(|next| next.get(0))
                .map_or(self.input.len(), |m| m.start());

            let text = self.input[body_start..body_end].trim();
            if text.is_empty() {
                continue;
            }

            let time_str = caps.get(1).map_or("", |m| m.as_str());
            let date_str = caps.get(2).map_or("", |m| m.as_str());
            let sender = caps.get(3).map_or("", |m| m.as_str().trim());

            let mut message = RawMessage::new(self.yielded, text).with_sender(sender);
            if let Some(ts) = parse_chat_timestamp(date_str, time_str) {
                message = message.with_timestamp(ts);
            }
            return Some(self.emit(message));
        }

        None
    }
}
