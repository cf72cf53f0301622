//! Manual catalog: one row per finished product name.
//!
//! For stock that never went through the chat the input is just a list of
//! names, one per line:
//!
//! ```text
//! # Miami, August
//! Birkin 30 Etoupe Togo Gold Hardware stamp K
//! Kelly 25 Mauve Pale Epsom Palladium Hardware stamp W
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Each row starts from
//! the constant columns, then gets the shared column values, the product
//! name, its image, and finally the values set for that one product.

use std::collections::BTreeMap;

use crate::config::ManualConfig;
use crate::core::row::{IMAGES_COLUMN, OutputRow, RowComposer, column_index};
use crate::error::{CatalogError, Result};

/// A [`ManualConfig`] with every column name resolved to its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualCatalog {
    image_start_index: usize,
    name_column: usize,
    columns: BTreeMap<usize, String>,
    overrides: BTreeMap<usize, BTreeMap<usize, String>>,
}

impl ManualCatalog {
    /// Resolves the configured column names.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidConfig`] naming the first header that is
    /// not one of the catalog columns.
    pub fn new(config: &ManualConfig) -> Result<Self> {
        let name_column = resolve("manual.name_column", &config.name_column)?;
        let columns = resolve_all("manual.columns", &config.columns)?;
        let overrides = config
            .overrides
            .iter()
            .map(|(&position, values)| Ok((position, resolve_all("manual.overrides", values)?)))
            .collect::<Result<_>>()?;

        Ok(Self {
            image_start_index: config.image_start_index,
            name_column,
            columns,
            overrides,
        })
    }

    /// Builds the row of the product at 0-based `position`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use catalogpack::config::{ImageConfig, ManualConfig};
    /// use catalogpack::core::{ManualCatalog, RowComposer};
    /// use chrono::NaiveDate;
    ///
    /// let catalog = ManualCatalog::new(&ManualConfig::new().with_image_start_index(10))?;
    /// let date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
    /// let composer = RowComposer::new("Hermès", ImageConfig::default(), date);
    ///
    /// let row = catalog.compose(&composer, "Kelly 25 Bleu Atoll Epsom", 2);
    /// assert_eq!(row.index, 3);
    /// assert_eq!(row.record()[3], "Kelly 25 Bleu Atoll Epsom");
    /// assert!(row.images.ends_with("HermesD12.jpg"));
    /// # Ok::<(), catalogpack::CatalogError>(())
    /// ```
    pub fn compose(&self, composer: &RowComposer, name: &str, position: usize) -> OutputRow {
        let mut row = composer.product(position + 1, self.image_start_index + position);

        row.columns = self.columns.clone();
        row.columns.remove(&IMAGES_COLUMN);
        row.columns.insert(self.name_column, name.to_string());
        if let Some(values) = self.overrides.get(&position) {
            row.columns
                .extend(values.iter().map(|(&index, value)| (index, value.clone())));
        }
        row
    }
}

/// The product names of a name list, in order.
pub fn product_names(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

fn resolve(field: &'static str, column: &str) -> Result<usize> {
    column_index(column).ok_or_else(|| {
        CatalogError::invalid_config(field, format!("'{column}' is not a catalog column"))
    })
}

fn resolve_all(
    field: &'static str,
    values: &BTreeMap<String, String>,
) -> Result<BTreeMap<usize, String>> {
    values
        .iter()
        .map(|(column, value)| Ok((resolve(field, column)?, value.clone())))
        .collect()
}
