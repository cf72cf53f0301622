//! Listing segmentation.
//!
//! A stock message usually lists several bags, one headline each:
//!
//! ```text
//! K20 Mini Gold Epsom GHW Stamp W
//! B25 Noir Togo PHW Stamp B
//! Like New – C18 Rouge Casaque Epsom GHW
//! ```
//!
//! A line starting with a model token opens a new listing. Messages with
//! fewer than two listings fall back to [`SegmentFallback`].

use regex::Regex;

use crate::config::SegmentFallback;
use crate::error::Result;
use crate::listing::{ListingBlock, ListingPosition};
use crate::message::RawMessage;

/// Model tokens that can open a listing, longest alternatives first inside
/// each family so `Kelly Pochette` is never cut down to `Kelly`.
const HEADLINE_PATTERN: &str = concat!(
    r"(?i)^(?:Like New\s*[-–—]*\s*)?",
    r"(?:",
    r"KP",
    r"|K\d{2}",
    r"|B\d{2}",
    r"|C\d{2}",
    r"|Birkin(?:\s+HAC\s+\d{2}|\s+\d{2})",
    r"|Kelly(?:\s+Pochette|\s+Elan|\s+Danse|\s+To\s+Go|\s+20\s+Mini|\s+25|\s+30)?",
    r"|Constance(?:\s+To\s+Go|\s+18\s+Mini|\s+\d{2})?",
    r"|Lindy(?:\s+\d{2})?",
    r"|Bolide(?:\s+on\s+Wheels|\s+Shark\s+Bag\s+Charm|\s+\d{2})?",
    r"|HAC\s*(?:à|a)\s*Dos",
    r")\b",
);

/// Splits messages into listing blocks.
///
/// # Example
///
/// ```rust
/// use catalogpack::RawMessage;
/// use catalogpack::config::SegmentFallback;
/// use catalogpack::parsing::ListingSegmenter;
///
/// let segmenter = ListingSegmenter::new(SegmentFallback::PerLine)?;
/// let message = RawMessage::new(0, "K20 Mini Gold Epsom GHW\nB25 Noir Togo PHW");
/// let blocks = segmenter.segment(&message);
///
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[1].text, "B25 Noir Togo PHW");
/// # Ok::<(), catalogpack::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ListingSegmenter {
    headline: Regex,
    fallback: SegmentFallback,
}

impl ListingSegmenter {
    pub fn new(fallback: SegmentFallback) -> Result<Self> {
        Ok(Self {
            headline: Regex::new(HEADLINE_PATTERN)?,
            fallback,
        })
    }

    /// Returns `true` if `line` starts with a listing headline token.
    pub fn is_headline(&self, line: &str) -> bool {
        self.headline.is_match(line)
    }

    /// Cuts one message into listing blocks, in order.
    ///
    /// Every returned block is trimmed and non-empty.
    pub fn segment<'a>(&self, message: &RawMessage<'a>) -> Vec<ListingBlock<'a>> {
        let text = message.text;

        // Byte offset where each block starts. The first line always opens a
        // block, whatever it contains.
        let mut starts = vec![0];
        let mut offset = 0;
        for (i, line) in text.split_inclusive('\n').enumerate() {
            if i > 0 && self.is_headline(line) {
                starts.push(offset);
            }
            offset += line.len();
        }

        let mut pieces: Vec<&'a str> = starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(text.len());
                text[start..end].trim()
            })
            .filter(|piece| !piece.is_empty())
            .collect();

        if pieces.len() < 2 {
            pieces = match self.fallback {
                SegmentFallback::PerLine => text
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect(),
                SegmentFallback::WholeMessage => {
                    let whole = text.trim();
                    if whole.is_empty() { vec![] } else { vec![whole] }
                }
            };
        }

        pieces
            .into_iter()
            .enumerate()
            .map(|(i, piece)| ListingBlock::new(ListingPosition::new(message.index, i), piece))
            .collect()
    }
}
