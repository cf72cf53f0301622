//! Configuration types for the listing pipeline.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies. Everything the pipeline needs is
//! passed in through a [`PipelineConfig`]; nothing is read from process state.
//!
//! # Presets
//!
//! | Preset | Input | Category | Image name | Prices |
//! |--------|-------|----------|------------|--------|
//! | [`Web`](Preset::Web) | `./mensajes.txt` | `Hermès` | `HermesD{n}.jpg` | no |
//! | [`Miami`](Preset::Miami) | `./stock-miami.txt` | `miami` | `Miami-Stock-Hermes-A{n}.jpg` | no |
//! | [`Pricing`](Preset::Pricing) | `./mensajes.txt` | `Hermès` | `HermesA{n}.jpg` | B2B / B2C |
//! | [`Manual`](Preset::Manual) | `./productos.txt` (one name per line) | `Hermès` | `Miami-Stock-Hermes-A{n}.jpg` | no |
//!
//! # Example
//!
//! ```rust
//! use catalogpack::config::{PipelineConfig, Preset};
//!
//! let config = PipelineConfig::preset(Preset::Miami)
//!     .with_category("miami-fall")
//!     .with_image_letter("B");
//!
//! assert_eq!(config.image.prefix, "Miami-Stock-Hermes-");
//! assert!(!config.extractor.price_extraction);
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Base of the WordPress uploads folder; `/YYYY/MM/` is appended per run.
pub const DEFAULT_UPLOADS_BASE: &str = "https://frontrowco.com/wp-content/uploads";

/// Default contact number for the "Inquire" button.
pub const DEFAULT_CONTACT_PHONE: &str = "13059429906";

/// Default business name used in the contact message.
pub const DEFAULT_BUSINESS_NAME: &str = "FRONT ROW";

/// Placeholder replaced by `DD.MM.YYYY` in output file name templates.
pub const DATE_PLACEHOLDER: &str = "{date}";

/// Image naming: `{uploads_base}/{YYYY}/{MM}/{prefix}{letter}{index}{extension}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub uploads_base: String,
    pub prefix: String,
    pub letter: String,
    pub extension: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            uploads_base: DEFAULT_UPLOADS_BASE.to_string(),
            prefix: "Hermes".to_string(),
            letter: "D".to_string(),
            extension: ".jpg".to_string(),
        }
    }
}

impl ImageConfig {
    /// Builds the image URL for a 1-based row index.
    ///
    /// # Example
    ///
    /// ```rust
    /// use catalogpack::config::ImageConfig;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
    /// assert_eq!(
    ///     ImageConfig::default().url(date, 12),
    ///     "https://frontrowco.com/wp-content/uploads/2025/08/HermesD12.jpg"
    /// );
    /// ```
    pub fn url(&self, date: NaiveDate, index: usize) -> String {
        format!(
            "{}/{}/{}",
            self.uploads_base.trim_end_matches('/'),
            date.format("%Y/%m"),
            self.file_name(index)
        )
    }

    /// Image file name without the folder, e.g. `HermesD12.jpg`.
    pub fn file_name(&self, index: usize) -> String {
        format!("{}{}{}{}", self.prefix, self.letter, index, self.extension)
    }
}

/// Stamp letter → production year.
///
/// Hand-maintained lists disagree on some letters (notably `K`, seen as 2016,
/// 2022 and 2025), so every entry can be overridden with
/// [`with_year`](StampYearTable::with_year) or from a JSON config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StampYearTable(BTreeMap<char, u16>);

impl Default for StampYearTable {
    fn default() -> Self {
        Self(BTreeMap::from([
            ('T', 2015),
            ('X', 2016),
            ('A', 2017),
            ('C', 2018),
            ('D', 2019),
            ('Y', 2020),
            ('Z', 2021),
            ('U', 2022),
            ('B', 2023),
            ('W', 2024),
            ('K', 2025),
        ]))
    }
}

impl StampYearTable {
    /// Creates a table with no entries.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Looks up a letter, case-insensitively.
    pub fn year_for(&self, letter: char) -> Option<u16> {
        self.0.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Sets or replaces the year for a letter.
    #[must_use]
    pub fn with_year(mut self, letter: char, year: u16) -> Self {
        self.0.insert(letter.to_ascii_uppercase(), year);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What the segmenter does with a message that holds fewer than two
/// listing headlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentFallback {
    /// Every non-blank line becomes its own listing.
    #[default]
    PerLine,
    /// The whole message is one listing (headline plus price lines).
    WholeMessage,
}

/// Settings for the attribute extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Read `B2B:` / `B2C:` lines into sale / regular prices (default: false)
    pub price_extraction: bool,

    /// Write `Stamp W 2024` instead of `Stamp W` in the description (default: false)
    pub stamp_year_in_description: bool,

    /// Letter → year lookup for stamps without an explicit year
    pub stamp_years: StampYearTable,

    /// Number opened by the "Inquire" WhatsApp button
    pub contact_phone: String,

    /// Business name greeted in the prefilled WhatsApp message
    pub business_name: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            price_extraction: false,
            stamp_year_in_description: false,
            stamp_years: StampYearTable::default(),
            contact_phone: DEFAULT_CONTACT_PHONE.to_string(),
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
        }
    }
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables price extraction.
    #[must_use]
    pub fn with_price_extraction(mut self, enabled: bool) -> Self {
        self.price_extraction = enabled;
        self
    }

    /// Includes the stamp year in the description.
    #[must_use]
    pub fn with_stamp_year_in_description(mut self, enabled: bool) -> Self {
        self.stamp_year_in_description = enabled;
        self
    }

    /// Replaces the stamp year table.
    #[must_use]
    pub fn with_stamp_years(mut self, table: StampYearTable) -> Self {
        self.stamp_years = table;
        self
    }

    /// Sets the contact phone number.
    #[must_use]
    pub fn with_contact_phone(mut self, phone: impl Into<String>) -> Self {
        self.contact_phone = phone.into();
        self
    }
}

/// Settings for a catalog built from a list of finished product names
/// rather than from chat listings. One row per name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualConfig {
    /// Image number of the first product (default: 1)
    pub image_start_index: usize,

    /// Column that receives the product name (default: `Name`)
    pub name_column: String,

    /// Column values shared by every row, keyed by header name
    pub columns: BTreeMap<String, String>,

    /// Column values for single products, keyed by 0-based position in the
    /// name list, then by header name
    pub overrides: BTreeMap<usize, BTreeMap<String, String>>,
}

impl Default for ManualConfig {
    fn default() -> Self {
        Self {
            image_start_index: 1,
            name_column: "Name".to_string(),
            columns: BTreeMap::new(),
            overrides: BTreeMap::new(),
        }
    }
}

impl ManualConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the image number of the first product.
    #[must_use]
    pub fn with_image_start_index(mut self, index: usize) -> Self {
        self.image_start_index = index;
        self
    }

    /// Writes the product name into another column, e.g. `Short description`.
    #[must_use]
    pub fn with_name_column(mut self, column: impl Into<String>) -> Self {
        self.name_column = column.into();
        self
    }

    /// Sets a column value for every row.
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.columns.insert(column.into(), value.into());
        self
    }

    /// Sets a column value for the product at `position` (0-based).
    #[must_use]
    pub fn with_override(
        mut self,
        position: usize,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.overrides
            .entry(position)
            .or_default()
            .insert(column.into(), value.into());
        self
    }
}

/// Named pipeline presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Website stock, no prices.
    #[default]
    Web,
    /// Miami stock list, no prices.
    Miami,
    /// Listings carrying B2B / B2C prices.
    Pricing,
    /// One row per line of a product name list.
    Manual,
}

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::Web => "web",
            Preset::Miami => "miami",
            Preset::Pricing => "pricing",
            Preset::Manual => "manual",
        }
    }

    pub fn all() -> &'static [Preset] {
        &[Preset::Web, Preset::Miami, Preset::Pricing, Preset::Manual]
    }

    pub fn all_names() -> &'static [&'static str] {
        &["web", "miami", "pricing", "manual"]
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Preset {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "web" => Ok(Preset::Web),
            "miami" => Ok(Preset::Miami),
            "pricing" | "prices" => Ok(Preset::Pricing),
            "manual" => Ok(Preset::Manual),
            _ => Err(CatalogError::UnknownPreset {
                name: s.to_string(),
                expected: Preset::all_names().join(", "),
            }),
        }
    }
}

/// Everything one pipeline run needs.
///
/// Deserializing fills missing fields from the `web` preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Label used in logs and in the default output name
    pub mode: String,

    /// Chat export to read
    pub input_path: PathBuf,

    /// Folder the CSV is written into (created if missing)
    pub export_folder: PathBuf,

    /// Value of the `Categories` column
    pub category: String,

    pub image: ImageConfig,

    /// Output file name; `{date}` becomes `DD.MM.YYYY`
    pub output_name_template: String,

    pub segment_fallback: SegmentFallback,

    pub extractor: ExtractorConfig,

    /// When set, the input is a product name list and no listing is parsed
    pub manual: Option<ManualConfig>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::preset(Preset::Web)
    }
}

impl PipelineConfig {
    /// Returns the resolved configuration of a preset.
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Web => Self {
                mode: "web".to_string(),
                input_path: PathBuf::from("./mensajes.txt"),
                export_folder: PathBuf::from("./export"),
                category: "Hermès".to_string(),
                image: ImageConfig::default(),
                output_name_template: "productos.web.{date}.csv".to_string(),
                segment_fallback: SegmentFallback::PerLine,
                extractor: ExtractorConfig::default(),
                manual: None,
            },
            Preset::Miami => Self {
                mode: "miami".to_string(),
                input_path: PathBuf::from("./stock-miami.txt"),
                export_folder: PathBuf::from("./export-miami"),
                category: "miami".to_string(),
                image: ImageConfig {
                    prefix: "Miami-Stock-Hermes-".to_string(),
                    letter: "A".to_string(),
                    ..ImageConfig::default()
                },
                output_name_template: "productos.miami.{date}.csv".to_string(),
                segment_fallback: SegmentFallback::PerLine,
                extractor: ExtractorConfig::default(),
                manual: None,
            },
            Preset::Pricing => Self {
                mode: "pricing".to_string(),
                input_path: PathBuf::from("./mensajes.txt"),
                export_folder: PathBuf::from("./export"),
                category: "Hermès".to_string(),
                image: ImageConfig {
                    letter: "A".to_string(),
                    ..ImageConfig::default()
                },
                output_name_template: "productos.{date}.csv".to_string(),
                segment_fallback: SegmentFallback::WholeMessage,
                extractor: ExtractorConfig::default()
                    .with_price_extraction(true)
                    .with_stamp_year_in_description(true),
                manual: None,
            },
            Preset::Manual => Self {
                mode: "manual".to_string(),
                input_path: PathBuf::from("./productos.txt"),
                export_folder: PathBuf::from("./export"),
                category: "Hermès".to_string(),
                image: ImageConfig {
                    prefix: "Miami-Stock-Hermes-".to_string(),
                    letter: "A".to_string(),
                    ..ImageConfig::default()
                },
                output_name_template: "productos.manual.{date}.csv".to_string(),
                segment_fallback: SegmentFallback::PerLine,
                extractor: ExtractorConfig::default(),
                manual: Some(ManualConfig::default()),
            },
        }
    }

    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields take their `web` preset values.
    #[cfg(feature = "json-config")]
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parses a configuration from JSON text.
    #[cfg(feature = "json-config")]
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the input export path.
    #[must_use]
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Sets the export folder.
    #[must_use]
    pub fn with_export_folder(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_folder = path.into();
        self
    }

    /// Sets the `Categories` column value.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the image letter.
    #[must_use]
    pub fn with_image_letter(mut self, letter: impl Into<String>) -> Self {
        self.image.letter = letter.into();
        self
    }

    /// Sets the segmentation fallback.
    #[must_use]
    pub fn with_segment_fallback(mut self, fallback: SegmentFallback) -> Self {
        self.segment_fallback = fallback;
        self
    }

    /// Builds a manual catalog from a product name list with these settings.
    #[must_use]
    pub fn with_manual(mut self, manual: ManualConfig) -> Self {
        self.manual = Some(manual);
        self
    }

    /// Replaces the extractor settings.
    #[must_use]
    pub fn with_extractor(mut self, extractor: ExtractorConfig) -> Self {
        self.extractor = extractor;
        self
    }

    /// Output file name for a run date, e.g. `productos.web.07.08.2025.csv`.
    pub fn output_file_name(&self, date: NaiveDate) -> String {
        self.output_name_template
            .replace(DATE_PLACEHOLDER, &date.format("%d.%m.%Y").to_string())
    }

    /// Full output path for a run date.
    pub fn output_path(&self, date: NaiveDate) -> PathBuf {
        self.export_folder.join(self.output_file_name(date))
    }

    /// Checks the values that would otherwise produce a broken catalog.
    pub fn validate(&self) -> Result<()> {
        if self.category.trim().is_empty() {
            return Err(CatalogError::invalid_config("category", "must not be empty"));
        }
        if self.image.uploads_base.trim().is_empty() {
            return Err(CatalogError::invalid_config(
                "image.uploads_base",
                "must not be empty",
            ));
        }
        let name = self.output_name_template.trim();
        if name.is_empty() {
            return Err(CatalogError::invalid_config(
                "output_name_template",
                "must not be empty",
            ));
        }
        if Path::new(name).components().count() != 1 {
            return Err(CatalogError::invalid_config(
                "output_name_template",
                format!("'{name}' must be a file name, not a path"),
            ));
        }
        if let Some(manual) = &self.manual {
            crate::core::manual::ManualCatalog::new(manual)?;
        }
        Ok(())
    }
}
