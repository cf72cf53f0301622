//! Listing types: the blocks cut out of a message and what is extracted
//! from them.
//!
//! The closed vocabularies (condition, model tag, hardware, full-set status)
//! are enums whose [`Display`](std::fmt::Display) and serde form is the exact
//! label written to the catalog.

use std::fmt;

use serde::Serialize;

/// Where a listing sat in the export: message index and index inside the
/// message, both 0-based.
///
/// Displays 1-based as `message-listing`, e.g. `3-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct ListingPosition {
    pub message: usize,
    pub listing: usize,
}

impl ListingPosition {
    pub fn new(message: usize, listing: usize) -> Self {
        Self { message, listing }
    }
}

impl fmt::Display for ListingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.message + 1, self.listing + 1)
    }
}

/// A span of a message believed to describe exactly one product.
///
/// The text is trimmed and never empty. The first line is the headline; the
/// following lines may carry price fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListingBlock<'a> {
    pub position: ListingPosition,
    pub text: &'a str,
}

impl<'a> ListingBlock<'a> {
    pub fn new(position: ListingPosition, text: &'a str) -> Self {
        Self { position, text }
    }

    /// First line of the block.
    pub fn headline(&self) -> &'a str {
        self.text.lines().next().unwrap_or_default()
    }

    pub fn lines(&self) -> std::str::Lines<'a> {
        self.text.lines()
    }
}

/// Item condition, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Condition {
    #[serde(rename = "New (Unused)")]
    NewUnused,
    #[serde(rename = "Brand New")]
    BrandNew,
    #[serde(rename = "Like New Excellent")]
    LikeNewExcellent,
    #[serde(rename = "Like New")]
    LikeNew,
    #[serde(rename = "Preowned")]
    Preowned,
}

impl Condition {
    /// Every condition, in the order labels are tried when matching phrases.
    pub const ALL: [Condition; 5] = [
        Condition::BrandNew,
        Condition::NewUnused,
        Condition::LikeNewExcellent,
        Condition::LikeNew,
        Condition::Preowned,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Condition::NewUnused => "New (Unused)",
            Condition::BrandNew => "Brand New",
            Condition::LikeNewExcellent => "Like New Excellent",
            Condition::LikeNew => "Like New",
            Condition::Preowned => "Preowned",
        }
    }

    /// Case-insensitive lookup of an exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which rule resolved the condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOrigin {
    /// "unused" appeared somewhere in the block.
    UnusedKeyword,
    /// One of the condition labels appeared verbatim.
    ExactPhrase,
    /// Normalized from "excellent".
    Excellent,
    /// Normalized from a bare "new".
    NewKeyword,
    /// Nothing found.
    Default,
}

/// Coarse model family used for tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModelTag {
    #[serde(rename = "HAC a Dos")]
    HacADos,
    Birkin,
    Kelly,
    Constance,
    Lindy,
    Bolide,
}

impl ModelTag {
    pub fn label(self) -> &'static str {
        match self {
            ModelTag::HacADos => "HAC a Dos",
            ModelTag::Birkin => "Birkin",
            ModelTag::Kelly => "Kelly",
            ModelTag::Constance => "Constance",
            ModelTag::Lindy => "Lindy",
            ModelTag::Bolide => "Bolide",
        }
    }
}

impl fmt::Display for ModelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hardware finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Hardware {
    #[serde(rename = "Palladium Hardware")]
    Palladium,
    #[serde(rename = "Gold Hardware")]
    Gold,
    #[serde(rename = "Rose Gold Hardware")]
    RoseGold,
    #[serde(rename = "Brushed Gold Hardware")]
    BrushedGold,
}

impl Hardware {
    pub fn label(self) -> &'static str {
        match self {
            Hardware::Palladium => "Palladium Hardware",
            Hardware::Gold => "Gold Hardware",
            Hardware::RoseGold => "Rose Gold Hardware",
            Hardware::BrushedGold => "Brushed Gold Hardware",
        }
    }
}

impl fmt::Display for Hardware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Completeness of the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum FullSet {
    #[default]
    #[serde(rename = "Full set with receipt")]
    WithReceipt,
    #[serde(rename = "Full set no receipt")]
    NoReceipt,
}

impl FullSet {
    pub fn label(self) -> &'static str {
        match self {
            FullSet::WithReceipt => "Full set with receipt",
            FullSet::NoReceipt => "Full set no receipt",
        }
    }
}

impl fmt::Display for FullSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the stamp letter was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StampOrigin {
    /// Explicit `Stamp X`.
    Keyword,
    /// Lone capital letter at the end of the headline. Low confidence.
    TrailingLetter,
}

/// Where the stamp year came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YearSource {
    /// Written next to the letter in the listing.
    Explicit,
    /// Looked up in the letter→year table.
    Table,
}

/// Manufacturing stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Stamp {
    pub letter: char,
    pub year: Option<u16>,
    pub year_source: Option<YearSource>,
    pub origin: StampOrigin,
}

impl Stamp {
    /// `Stamp W`
    pub fn label(&self) -> String {
        format!("Stamp {}", self.letter)
    }

    /// `Stamp W 2024`, or just the letter form when no year is known.
    pub fn label_with_year(&self) -> String {
        match self.year {
            Some(year) => format!("Stamp {} {}", self.letter, year),
            None => self.label(),
        }
    }
}

/// Structured result of extracting one listing block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedListing {
    pub position: ListingPosition,
    pub model_tag: Option<ModelTag>,
    /// Size-qualified model, e.g. `Birkin 30`. Empty when not found.
    pub model: String,
    pub material: Option<Hardware>,
    pub stamp: Option<Stamp>,
    pub condition: Condition,
    pub condition_origin: ConditionOrigin,
    pub full_set: FullSet,
    /// Headline text left after the recognized tokens are removed.
    pub details: String,
    pub price_regular: Option<String>,
    pub price_sale: Option<String>,
    pub price_on_request: bool,
    pub description_html: String,
    pub tags: String,
}

impl ExtractedListing {
    /// Returns the model tag label, or `""`.
    pub fn model_tag_label(&self) -> &'static str {
        self.model_tag.map_or("", ModelTag::label)
    }

    /// Returns the hardware label, or `""`.
    pub fn material_label(&self) -> &'static str {
        self.material.map_or("", Hardware::label)
    }
}
