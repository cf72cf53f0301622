//! WooCommerce import rows.
//!
//! The importer wants the full 39-column layout even though a listing only
//! fills a handful of them. Everything not listed in [`OutputRow`] is an
//! empty string, except a few constant columns (`Type`, `Name`...).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::ImageConfig;
use crate::listing::ExtractedListing;

/// Header of the catalog file, in column order.
pub const COLUMNS: [&str; 39] = [
    "ID",
    "Type",
    "SKU",
    "Name",
    "Published",
    "Is featured?",
    "Visibility in catalog",
    "Short description",
    "Description",
    "Date sale price starts",
    "Date sale price ends",
    "Tax status",
    "Tax class",
    "In stock?",
    "Stock",
    "Low stock amount",
    "Backorders allowed?",
    "Sold individually?",
    "Weight (kg)",
    "Length (cm)",
    "Width (cm)",
    "Height (cm)",
    "Allow customer reviews?",
    "Purchase note",
    "Sale price",
    "Regular price",
    "Categories",
    "Tags",
    "Shipping class",
    "Images",
    "Download limit",
    "Download expiry days",
    "Parent",
    "Grouped products",
    "Upsells",
    "Cross-sells",
    "External URL",
    "Button text",
    "Position",
];

pub const PRODUCT_TYPE: &str = "simple";
pub const PRODUCT_NAME: &str = "Hermès";

/// Position of the `Images` column.
pub const IMAGES_COLUMN: usize = 29;

/// Position of a column in [`COLUMNS`], by exact header name.
pub fn column_index(name: &str) -> Option<usize> {
    COLUMNS.iter().position(|column| *column == name)
}

/// The columns that vary per listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    /// 1-based position among the rows of one run.
    pub index: usize,
    pub short_description: String,
    pub sale_price: String,
    pub regular_price: String,
    pub categories: String,
    pub tags: String,
    pub images: String,
    /// Values by column position, written over everything above.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub columns: BTreeMap<usize, String>,
}

impl OutputRow {
    /// All 39 fields in [`COLUMNS`] order.
    pub fn record(&self) -> [&str; 39] {
        let mut record = [""; 39];
        record[1] = PRODUCT_TYPE;
        record[3] = PRODUCT_NAME;
        record[4] = "1";
        record[5] = "0";
        record[6] = "visible";
        record[7] = &self.short_description;
        record[24] = &self.sale_price;
        record[25] = &self.regular_price;
        record[26] = &self.categories;
        record[27] = &self.tags;
        record[IMAGES_COLUMN] = &self.images;
        record[38] = "0";
        for (&index, value) in &self.columns {
            if let Some(field) = record.get_mut(index) {
                *field = value.as_str();
            }
        }
        record
    }
}

/// Builds rows for one run: same category, image naming and date throughout.
#[derive(Debug, Clone)]
pub struct RowComposer {
    category: String,
    image: ImageConfig,
    run_date: NaiveDate,
}

impl RowComposer {
    pub fn new(category: impl Into<String>, image: ImageConfig, run_date: NaiveDate) -> Self {
        Self {
            category: category.into(),
            image,
            run_date,
        }
    }

    /// Composes the row for `listing` at 1-based `index`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use catalogpack::config::{ExtractorConfig, ImageConfig};
    /// use catalogpack::core::RowComposer;
    /// use catalogpack::extract::ListingExtractor;
    /// use catalogpack::listing::{ListingBlock, ListingPosition};
    /// use chrono::NaiveDate;
    ///
    /// let extractor = ListingExtractor::new(ExtractorConfig::default())?;
    /// let listing = extractor.extract(&ListingBlock::new(ListingPosition::default(), "K25 Gold Togo GHW"))?;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
    /// let row = RowComposer::new("Hermès", ImageConfig::default(), date).compose(&listing, 3);
    ///
    /// assert_eq!(row.tags, "Brand New, Kelly");
    /// assert!(row.images.ends_with("/2025/08/HermesD3.jpg"));
    /// # Ok::<(), catalogpack::CatalogError>(())
    /// ```
    pub fn compose(&self, listing: &ExtractedListing, index: usize) -> OutputRow {
        OutputRow {
            short_description: listing.description_html.clone(),
            sale_price: listing.price_sale.clone().unwrap_or_default(),
            regular_price: listing.price_regular.clone().unwrap_or_default(),
            tags: listing.tags.clone(),
            ..self.product(index, index)
        }
    }

    /// A row with only the constant columns, the category and the image of
    /// `image_number` filled in.
    pub fn product(&self, index: usize, image_number: usize) -> OutputRow {
        OutputRow {
            index,
            short_description: String::new(),
            sale_price: String::new(),
            regular_price: String::new(),
            categories: self.category.clone(),
            tags: String::new(),
            images: self.image.url(self.run_date, image_number),
            columns: BTreeMap::new(),
        }
    }
}
