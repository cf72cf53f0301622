//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Mode`] - Preset selector, converts into [`Preset`]
//!
//! # Example
//!
//! ```rust
//! use catalogpack::cli::Mode;
//! use catalogpack::config::Preset;
//!
//! let preset: Preset = Mode::Pricing.into();
//! assert_eq!(preset, Preset::Pricing);
//! ```

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{PipelineConfig, Preset};
use crate::error::{CatalogError, Result};

/// Turn WhatsApp stock listings into a WooCommerce product CSV.
#[derive(Parser, Debug, Clone)]
#[command(name = "catalogpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    catalogpack
    catalogpack miami --input stock-miami.txt
    catalogpack pricing --date 2025-08-07 --image-letter B
    catalogpack web --config front-row.json --stdout
    catalogpack manual --input productos.txt")]
pub struct Args {
    /// Pipeline preset
    #[arg(value_enum, default_value = "web")]
    pub mode: Mode,

    /// Chat export to read (default depends on the preset)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Folder the CSV is written into
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON file with a full pipeline configuration; replaces the preset
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run date used for image folders and the file name (YYYY-MM-DD, default today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Value of the Categories column
    #[arg(long)]
    pub category: Option<String>,

    /// Letter between the image prefix and index
    #[arg(long, value_name = "LETTER")]
    pub image_letter: Option<String>,

    /// Log every extracted field
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the CSV to stdout instead of the export folder
    #[arg(long)]
    pub stdout: bool,
}

impl Args {
    /// Preset or JSON config, with the command-line overrides applied.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_json_file(path)?,
            None => PipelineConfig::preset(self.mode.into()),
        };

        if let Some(input) = &self.input {
            config = config.with_input_path(input);
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_export_folder(dir);
        }
        if let Some(category) = &self.category {
            config = config.with_category(category);
        }
        if let Some(letter) = &self.image_letter {
            config = config.with_image_letter(letter);
        }

        config.validate()?;
        Ok(config)
    }

    /// The `--date` override, or today's local date.
    pub fn run_date(&self) -> Result<NaiveDate> {
        match &self.date {
            Some(date) => parse_run_date(date),
            None => Ok(Local::now().date_naive()),
        }
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_run_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| CatalogError::invalid_date(input))
}

/// Preset selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Website stock (HermesD images, no prices)
    #[default]
    Web,

    /// Miami stock list
    Miami,

    /// Listings with B2B / B2C prices
    #[value(alias = "prices")]
    #[serde(alias = "prices")]
    Pricing,

    /// One row per line of a product name list
    Manual,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Preset::from(*self).name())
    }
}

impl From<Mode> for Preset {
    fn from(mode: Mode) -> Preset {
        match mode {
            Mode::Web => Preset::Web,
            Mode::Miami => Preset::Miami,
            Mode::Pricing => Preset::Pricing,
            Mode::Manual => Preset::Manual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("catalogpack").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.mode, Mode::Web);
        assert!(!args.stdout);
        let config = args.pipeline_config().unwrap();
        assert_eq!(config, PipelineConfig::preset(Preset::Web));
    }

    #[test]
    fn test_mode_alias() {
        assert_eq!(parse(&["prices"]).mode, Mode::Pricing);
        assert_eq!(parse(&["miami"]).mode, Mode::Miami);
        assert_eq!(parse(&["manual"]).mode, Mode::Manual);
    }

    #[test]
    fn test_overrides() {
        let args = parse(&[
            "miami",
            "--input",
            "in.txt",
            "--output-dir",
            "out",
            "--category",
            "miami-fall",
            "--image-letter",
            "C",
        ]);
        let config = args.pipeline_config().unwrap();
        assert_eq!(config.input_path, PathBuf::from("in.txt"));
        assert_eq!(config.export_folder, PathBuf::from("out"));
        assert_eq!(config.category, "miami-fall");
        assert_eq!(config.image.file_name(4), "Miami-Stock-Hermes-C4.jpg");
    }

    #[test]
    fn test_empty_category_rejected() {
        let args = parse(&["--category", " "]);
        assert!(args.pipeline_config().unwrap_err().is_config());
    }

    #[test]
    fn test_run_date() {
        let args = parse(&["--date", "2025-08-07"]);
        assert_eq!(args.run_date().unwrap(), NaiveDate::from_ymd_opt(2025, 8, 7).unwrap());
        assert!(parse_run_date("07/08/2025").unwrap_err().is_config());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Args::try_parse_from(["catalogpack", "paris"]).is_err());
    }

    #[test]
    fn test_mode_display_and_serde() {
        assert_eq!(Mode::Pricing.to_string(), "pricing");
        assert_eq!(serde_json::to_string(&Mode::Miami).unwrap(), "\"miami\"");
        let parsed: Mode = serde_json::from_str("\"prices\"").unwrap();
        assert_eq!(parsed, Mode::Pricing);
    }

    #[test]
    fn test_manual_mode_keeps_catalog_settings() {
        let config = parse(&["manual", "--image-letter", "B"]).pipeline_config().unwrap();
        assert_eq!(config.mode, "manual");
        assert_eq!(config.manual.unwrap().image_start_index, 1);
        assert_eq!(config.image.file_name(2), "Miami-Stock-Hermes-B2.jpg");
    }
}
