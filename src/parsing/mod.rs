//! Front stages of the pipeline: cutting an export into messages and a
//! message into listing blocks.
//!
//! - [`whatsapp`] - [`MessageSplitter`] for `[H:MM, D/M/YYYY] Sender: ` exports
//! - [`segmenter`] - [`ListingSegmenter`] for model-headline boundaries

pub mod segmenter;
pub mod whatsapp;

pub use segmenter::ListingSegmenter;
pub use whatsapp::{MessageSplitter, Messages, parse_chat_timestamp};
