//! # catalogpack
//!
//! Turns stock listings shared as WhatsApp messages into a WooCommerce
//! product import CSV.
//!
//! ## Overview
//!
//! A supplier forwards messages like:
//!
//! ```text
//! [9:41, 7/8/2025] Front Row: K20 Mini Gold Epsom GHW Stamp W
//! B25 Noir Togo PHW (Unused)
//! ```
//!
//! Each listing is split out, its attributes (model, hardware, stamp,
//! condition, full-set status, prices) are read with ordered rule lists, and
//! one catalog row is written per listing.
//!
//! ## Quick Start
//!
//! ```rust
//! use catalogpack::prelude::*;
//! use chrono::NaiveDate;
//!
//! fn main() -> Result<()> {
//!     let input = "[9:41, 7/8/2025] Front Row: K20 Mini Gold Epsom GHW Stamp W\nB25 Noir Togo PHW (Unused)";
//!     let date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
//!
//!     let run = run_pipeline(input, &PipelineConfig::preset(Preset::Web), date)?;
//!
//!     assert_eq!(run.rows.len(), 2);
//!     assert_eq!(run.listings[1].condition, Condition::NewUnused);
//!     assert!(run.rows[1].images.ends_with("/2025/08/HermesD2.jpg"));
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`parsing::MessageSplitter`] cuts the export into messages
//! 2. [`parsing::ListingSegmenter`] cuts a message into listing blocks
//! 3. [`extract::ListingExtractor`] reads the attributes of a block
//! 4. [`core::RowComposer`] maps a listing onto the 39 import columns
//! 5. [`core::output`] writes the CSV
//!
//! The `manual` preset skips steps 1 to 3: its input is a plain list of
//! product names and [`core::ManualCatalog`] builds one row per name.
//!
//! A listing that cannot be extracted is logged with its `message-listing`
//! position and left out; it never aborts the run.
//!
//! ## Module Structure
//!
//! - [`config`] - Presets, [`PipelineConfig`](config::PipelineConfig), stamp-year table
//! - [`message`] - [`RawMessage`]
//! - [`listing`] - Listing blocks and extracted attribute types
//! - [`parsing`] - Message splitting and listing segmentation
//! - [`extract`] - Attribute extraction
//! - [`core`] - Row composition, the pipeline, CSV output
//! - [`cli`] - CLI types (requires `cli` feature)
//! - [`error`] - Unified error types ([`CatalogError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod listing;
pub mod message;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{CatalogError, Result};
pub use message::RawMessage;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use catalogpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::RawMessage;

    // Error types
    pub use crate::error::{CatalogError, Result};

    // Configuration
    pub use crate::config::{
        ExtractorConfig, ImageConfig, ManualConfig, PipelineConfig, Preset, SegmentFallback,
        StampYearTable,
    };

    // Listing types
    pub use crate::listing::{
        Condition, ExtractedListing, FullSet, Hardware, ListingBlock, ListingPosition, ModelTag,
        Stamp,
    };

    // Pipeline stages
    pub use crate::extract::ListingExtractor;
    pub use crate::parsing::{ListingSegmenter, MessageSplitter};

    // Processing
    pub use crate::core::{
        CatalogRun, ManualCatalog, OutputRow, Pipeline, RowComposer, run_pipeline,
    };

    // Output (file writer and string converter)
    #[cfg(feature = "csv-output")]
    pub use crate::core::{process_file, to_catalog_csv, write_catalog_csv};
}
