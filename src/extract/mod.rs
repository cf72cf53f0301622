//! Attribute extraction: one listing block in, one [`ExtractedListing`] out.
//!
//! Condition, model tag, full-set status and prices are read from the whole
//! block. Model, hardware and stamp are read from the cleaned headline, and
//! whatever they leave behind becomes the free-text details (colour,
//! leather...).
//!
//! # Example
//!
//! ```rust
//! use catalogpack::config::ExtractorConfig;
//! use catalogpack::extract::ListingExtractor;
//! use catalogpack::listing::{Condition, ListingBlock, ListingPosition, ModelTag};
//!
//! let extractor = ListingExtractor::new(ExtractorConfig::default())?;
//! let block = ListingBlock::new(ListingPosition::default(), "B30 Gold Epsom GHW Stamp W");
//! let listing = extractor.extract(&block)?;
//!
//! assert_eq!(listing.model, "Birkin 30");
//! assert_eq!(listing.model_tag, Some(ModelTag::Birkin));
//! assert_eq!(listing.details, "Gold Epsom");
//! assert_eq!(listing.condition, Condition::BrandNew);
//! assert!(listing.description_html.starts_with("Birkin 30 Gold Epsom Gold Hardware Stamp W<div"));
//! # Ok::<(), catalogpack::CatalogError>(())
//! ```

pub mod condition;
pub mod description;
pub mod headline;
pub mod hardware;
pub mod model;
pub mod price;
pub mod stamp;

use std::ops::Range;

use regex::Regex;
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::error::{CatalogError, Result};
use crate::listing::{ExtractedListing, FullSet, Hardware, ListingBlock, StampOrigin};

pub use condition::ConditionDetector;
pub use description::{PRICE_ON_REQUEST_NOTE, hidden_fragment, tags, visible_description};
pub use hardware::HardwareRecognizer;
pub use headline::{HeadlineCleaner, collapse_whitespace};
pub use model::{ModelMatch, ModelRecognizer, title_case};
pub use price::{PriceReader, Prices};
pub use stamp::StampRecognizer;

const NO_RECEIPT_PATTERN: &str =
    r"(?i)\b(?:no\s+(?:receipt|receip|reciept|recipt)|without\s+receipt|w/o\s+receipt)\b";

/// Turns listing blocks into structured listings.
///
/// All patterns are compiled once in [`new`](ListingExtractor::new); the
/// extractor is then cheap to share across blocks.
#[derive(Debug, Clone)]
pub struct ListingExtractor {
    config: ExtractorConfig,
    conditions: ConditionDetector,
    models: ModelRecognizer,
    hardware: HardwareRecognizer,
    stamps: StampRecognizer,
    cleaner: HeadlineCleaner,
    prices: PriceReader,
    no_receipt: Regex,
}

impl ListingExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        Ok(Self {
            config,
            conditions: ConditionDetector::new()?,
            models: ModelRecognizer::new()?,
            hardware: HardwareRecognizer::new()?,
            stamps: StampRecognizer::new()?,
            cleaner: HeadlineCleaner::new()?,
            prices: PriceReader::new()?,
            no_receipt: Regex::new(NO_RECEIPT_PATTERN)?,
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts every attribute of one block.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Extraction`] when nothing describable is left
    /// once condition, receipt and date words are removed from the headline,
    /// e.g. a line reading only `Brand New - Full set`.
    pub fn extract(&self, block: &ListingBlock<'_>) -> Result<ExtractedListing> {
        let text = block.text;

        let (condition, condition_origin) = self.conditions.detect(text);
        let model_tag = self.models.tag(text);
        let full_set = if self.no_receipt.is_match(text) {
            FullSet::NoReceipt
        } else {
            FullSet::WithReceipt
        };

        let cleaned = self.cleaner.clean(block.headline());
        let model = self.models.model(&cleaned);
        let material = self.hardware.find(&cleaned);
        let stamp = self.stamps.find(&cleaned, &self.config.stamp_years);

        let spans = [
            model.as_ref().map(|m| m.span.clone()),
            material.as_ref().map(|(_, span)| span.clone()),
            stamp.as_ref().map(|(_, span)| span.clone()),
        ];
        let details = collapse_whitespace(&cut_spans(&cleaned, spans.into_iter().flatten()));

        let model = model.map(|m| m.model).unwrap_or_default();
        let material = material.map(|(hardware, _)| hardware);
        let stamp = stamp.map(|(stamp, _)| stamp);

        let stamp_label = match stamp {
            Some(s) if self.config.stamp_year_in_description => s.label_with_year(),
            Some(s) => s.label(),
            None => String::new(),
        };
        let visible = visible_description(&[
            model.as_str(),
            details.as_str(),
            material.map_or("", Hardware::label),
            stamp_label.as_str(),
        ]);
        if visible.is_empty() {
            return Err(CatalogError::extraction(
                block.position,
                "nothing left to describe after cleaning the headline",
            ));
        }

        let prices = if self.config.price_extraction {
            self.prices.extract(text)
        } else {
            Prices::default()
        };

        let mut description_html = visible;
        if prices.on_request {
            description_html.push_str(PRICE_ON_REQUEST_NOTE);
        }
        description_html.push_str(&hidden_fragment(
            full_set,
            condition,
            &self.config.contact_phone,
            &self.config.business_name,
        ));

        if stamp.is_some_and(|s| s.origin == StampOrigin::TrailingLetter) {
            debug!(position = %block.position, "stamp read from trailing letter");
        }
        debug!(
            position = %block.position,
            condition = %condition,
            origin = ?condition_origin,
            model = %model,
            "extracted listing"
        );

        Ok(ExtractedListing {
            position: block.position,
            model_tag,
            model,
            material,
            stamp,
            condition,
            condition_origin,
            full_set,
            details,
            price_regular: prices.regular,
            price_sale: prices.sale,
            price_on_request: prices.on_request,
            description_html,
            tags: tags(condition, model_tag),
        })
    }
}

/// Replaces each byte range of `text` with a space. Overlapping ranges are
/// cut once.
fn cut_spans(text: &str, spans: impl IntoIterator<Item = Range<usize>>) -> String {
    let mut spans: Vec<_> = spans.into_iter().collect();
    spans.sort_by_key(|span| span.start);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        if span.start >= cursor {
            out.push_str(&text[cursor..span.start]);
            out.push(' ');
        }
        cursor = cursor.max(span.end);
    }
    out.push_str(&text[cursor..]);
    out
}
