//! The listing pipeline: split, segment, extract, compose.
//!
//! One [`Pipeline`] serves every preset; everything that differs between
//! them lives in the [`PipelineConfig`] it is built from. A config with a
//! `manual` section reads a product name list instead of a chat export.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::core::manual::{ManualCatalog, product_names};
use crate::core::row::{OutputRow, RowComposer};
use crate::error::Result;
use crate::extract::ListingExtractor;
use crate::listing::{Condition, ExtractedListing};
use crate::parsing::{ListingSegmenter, MessageSplitter};

/// Number of emitted rows per condition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionSummary(BTreeMap<Condition, usize>);

impl ConditionSummary {
    pub fn record(&mut self, condition: Condition) {
        *self.0.entry(condition).or_default() += 1;
    }

    pub fn count(&self, condition: Condition) -> usize {
        self.0.get(&condition).copied().unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Conditions seen, best first.
    pub fn iter(&self) -> impl Iterator<Item = (Condition, usize)> + '_ {
        self.0.iter().map(|(condition, count)| (*condition, *count))
    }
}

impl fmt::Display for ConditionSummary {
    /// `New (Unused): 2, Brand New: 5`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (condition, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{condition}: {count}")?;
        }
        Ok(())
    }
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub messages: usize,
    pub blocks: usize,
    pub rows: usize,
    pub skipped: usize,
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct CatalogRun {
    /// Rows in emission order; `rows[i].index == i + 1`.
    pub rows: Vec<OutputRow>,
    /// The listing behind each row, same order. Empty for a manual catalog.
    pub listings: Vec<ExtractedListing>,
    pub conditions: ConditionSummary,
    pub stats: ProcessingStats,
}

/// A configured pipeline, patterns compiled.
///
/// # Example
///
/// ```rust
/// use catalogpack::config::{PipelineConfig, Preset};
/// use catalogpack::core::Pipeline;
/// use chrono::NaiveDate;
///
/// let pipeline = Pipeline::new(PipelineConfig::preset(Preset::Web))?;
/// let date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
/// let run = pipeline.run("[9:41, 7/8/2025] Front Row: K20 Mini Gold Epsom GHW\nB25 Noir Togo PHW", date);
///
/// assert_eq!(run.rows.len(), 2);
/// assert_eq!(run.listings[0].model, "Kelly 20");
/// # Ok::<(), catalogpack::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    splitter: MessageSplitter,
    segmenter: ListingSegmenter,
    extractor: ListingExtractor,
    manual: Option<ManualCatalog>,
}

impl Pipeline {
    /// Validates `config` and compiles every pattern.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            splitter: MessageSplitter::new()?,
            segmenter: ListingSegmenter::new(config.segment_fallback)?,
            extractor: ListingExtractor::new(config.extractor.clone())?,
            manual: config.manual.as_ref().map(ManualCatalog::new).transpose()?,
            config,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the whole export through the pipeline.
    ///
    /// Listings that fail extraction are logged and left out; the rows that
    /// remain are numbered 1..=N without gaps.
    pub fn run(&self, input: &str, run_date: NaiveDate) -> CatalogRun {
        let composer = RowComposer::new(
            self.config.category.clone(),
            self.config.image.clone(),
            run_date,
        );
        if let Some(manual) = &self.manual {
            return self.run_manual(manual, &composer, input);
        }
        let mut run = CatalogRun::default();

        for message in self.splitter.split(input) {
            run.stats.messages += 1;

            for block in self.segmenter.segment(&message) {
                run.stats.blocks += 1;

                let listing = match self.extractor.extract(&block) {
                    Ok(listing) => listing,
                    Err(e) => {
                        warn!(position = %block.position, "{e}");
                        run.stats.skipped += 1;
                        continue;
                    }
                };

                let row = composer.compose(&listing, run.rows.len() + 1);
                info!(
                    position = %listing.position,
                    index = row.index,
                    condition = %listing.condition,
                    "{}",
                    summary_line(&listing)
                );

                run.conditions.record(listing.condition);
                run.rows.push(row);
                run.listings.push(listing);
            }
        }

        run.stats.rows = run.rows.len();
        info!(
            mode = %self.config.mode,
            messages = run.stats.messages,
            rows = run.stats.rows,
            skipped = run.stats.skipped,
            conditions = %run.conditions,
            "catalog built"
        );
        run
    }

    fn run_manual(&self, manual: &ManualCatalog, composer: &RowComposer, input: &str) -> CatalogRun {
        let mut run = CatalogRun::default();

        for (position, name) in product_names(input).enumerate() {
            let row = manual.compose(composer, name, position);
            info!(index = row.index, images = %row.images, "{name}");
            run.rows.push(row);
        }

        run.stats.blocks = run.rows.len();
        run.stats.rows = run.rows.len();
        if run.rows.is_empty() {
            warn!(mode = %self.config.mode, "no product names in input");
        }
        info!(mode = %self.config.mode, rows = run.stats.rows, "manual catalog built");
        run
    }

    /// Reads the configured input, runs the pipeline and writes the CSV into
    /// the export folder. Returns the run and the file written.
    ///
    /// Nothing is written when the input cannot be read.
    #[cfg(feature = "csv-output")]
    pub fn process_file(&self, run_date: NaiveDate) -> Result<(CatalogRun, std::path::PathBuf)> {
        let input_path = &self.config.input_path;
        if !input_path.exists() {
            return Err(crate::error::CatalogError::input_not_found(input_path));
        }
        let input = std::fs::read_to_string(input_path)?;
        let run = self.run(&input, run_date);

        std::fs::create_dir_all(&self.config.export_folder)?;
        let output_path = self.config.output_path(run_date);
        crate::core::output::write_catalog_csv(&run.rows, &output_path)?;
        info!(path = %output_path.display(), rows = run.rows.len(), "catalog written");

        Ok((run, output_path))
    }
}

/// `Birkin 30 | Gold Hardware | Stamp W`, skipping what is missing.
fn summary_line(listing: &ExtractedListing) -> String {
    let stamp = listing.stamp.map(|s| s.label()).unwrap_or_default();
    [
        listing.model.as_str(),
        listing.material_label(),
        stamp.as_str(),
        listing.details.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" | ")
}

/// Builds a [`Pipeline`] from `config` and runs it over `input`.
pub fn run_pipeline(input: &str, config: &PipelineConfig, run_date: NaiveDate) -> Result<CatalogRun> {
    Ok(Pipeline::new(config.clone())?.run(input, run_date))
}

/// Full processing pipeline: read the input file, extract, write the CSV.
#[cfg(feature = "csv-output")]
pub fn process_file(
    config: &PipelineConfig,
    run_date: NaiveDate,
) -> Result<(CatalogRun, std::path::PathBuf)> {
    Pipeline::new(config.clone())?.process_file(run_date)
}
