//! Unified error types for catalogpack.
//!
//! This module provides a single [`CatalogError`] enum that covers every
//! fatal condition in the library, plus the per-listing
//! [`Extraction`](CatalogError::Extraction) failure that the pipeline catches
//! and logs instead of propagating.
//!
//! # Error Handling Philosophy
//!
//! - **Configuration and input errors** are fatal: nothing is written
//! - **Listing errors** are isolated: the listing is dropped, the batch goes on
//! - **Degraded input** (no chat prefixes, no model tokens) is never an error

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::listing::ListingPosition;

/// A specialized [`Result`] type for catalogpack operations.
///
/// # Example
///
/// ```rust
/// use catalogpack::error::Result;
///
/// fn my_function() -> Result<Vec<String>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, CatalogError>;

/// The error type for all catalogpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// An I/O error occurred while reading the export or writing the CSV.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input export does not exist.
    #[error("Input file not found: {}", path.display())]
    InputNotFound {
        /// The path that was looked up
        path: PathBuf,
    },

    /// The requested preset name is not known.
    #[error("Unknown preset '{name}'. Expected one of: {expected}")]
    UnknownPreset {
        /// The name that was requested
        name: String,
        /// Comma-separated list of valid names
        expected: String,
    },

    /// A configuration value is unusable.
    #[error("Invalid configuration: {field}: {message}")]
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date supplied as the run-date override.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A built-in pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// A single listing could not be turned into a catalog entry.
    ///
    /// The pipeline catches this variant per listing and never lets it abort
    /// the batch.
    #[error("Listing {position} skipped: {reason}")]
    Extraction {
        /// Where the listing sat in the export
        position: ListingPosition,
        /// Why it was skipped
        reason: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON configuration could not be read.
    #[cfg(feature = "json-config")]
    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl CatalogError {
    /// Creates a listing extraction error.
    pub fn extraction(position: ListingPosition, reason: impl Into<String>) -> Self {
        CatalogError::Extraction {
            position,
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        CatalogError::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        CatalogError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an input-not-found error.
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        CatalogError::InputNotFound { path: path.into() }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, CatalogError::Io(_))
    }

    /// Returns `true` if this error only affects a single listing.
    pub fn is_extraction(&self) -> bool {
        matches!(self, CatalogError::Extraction { .. })
    }

    /// Returns `true` if this is a configuration-level error.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidConfig { .. }
                | CatalogError::UnknownPreset { .. }
                | CatalogError::InvalidDate { .. }
        )
    }
}
