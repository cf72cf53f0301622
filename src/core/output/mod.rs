//! Output writers.
//!
//! - [`write_catalog_csv`] / [`to_catalog_csv`] - WooCommerce import CSV, requires `csv-output` feature
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> catalogpack::Result<()> {
//! use catalogpack::core::output::to_catalog_csv;
//!
//! let csv = to_catalog_csv(&[])?;
//! assert!(csv.starts_with("\u{FEFF}ID,Type,SKU,Name"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{BOM, to_catalog_csv, write_catalog, write_catalog_csv};
