//! Back stages of the pipeline and the pipeline itself.
//!
//! This module contains:
//! - [`row`] - WooCommerce column layout and [`RowComposer`]
//! - [`manual`] - [`ManualCatalog`], rows from a list of product names
//! - [`processor`] - [`Pipeline`], run statistics and the condition histogram
//! - [`output`] - CSV writer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> catalogpack::Result<()> {
//! use catalogpack::config::{PipelineConfig, Preset};
//! use catalogpack::core::process_file;
//! use chrono::Local;
//!
//! let config = PipelineConfig::preset(Preset::Miami).with_input_path("stock.txt");
//! let (run, path) = process_file(&config, Local::now().date_naive())?;
//! println!("{} rows written to {}", run.rows.len(), path.display());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

pub mod manual;
pub mod output;
pub mod processor;
pub mod row;

#[cfg(feature = "csv-output")]
pub use output::{to_catalog_csv, write_catalog_csv};
#[cfg(feature = "csv-output")]
pub use processor::process_file;
pub use manual::{ManualCatalog, product_names};
pub use processor::{CatalogRun, ConditionSummary, Pipeline, ProcessingStats, run_pipeline};
pub use row::{COLUMNS, OutputRow, RowComposer};
