//! B2B / B2C price lines.
//!
//! ```text
//! B30 Gold Epsom GHW Stamp W
//! B2B: 2.5k
//! B2C: $3,100
//! ```
//!
//! `B2B` is the sale price, `B2C` the regular price. Values are thousands of
//! dollars unless they are already 1000 or more.

use regex::Regex;

use crate::error::Result;

/// Prices read from one listing block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Prices {
    pub sale: Option<String>,
    pub regular: Option<String>,
    pub on_request: bool,
}

const SALE_KEY: &str = "b2b:";
const REGULAR_KEY: &str = "b2c:";
const ON_REQUEST: &str = "price under request";
const LEADING_NUMBER: &str = r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)";

#[derive(Debug, Clone)]
pub struct PriceReader {
    number: Regex,
}

impl PriceReader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            number: Regex::new(LEADING_NUMBER)?,
        })
    }

    /// Reads the first `B2B:` and `B2C:` lines of a block.
    ///
    /// A block saying "price under request", or without any price line, is
    /// priced on request and gets no prices at all.
    pub fn extract(&self, text: &str) -> Prices {
        let sale_line = find_line(text, SALE_KEY);
        let regular_line = find_line(text, REGULAR_KEY);

        if text.to_lowercase().contains(ON_REQUEST) || (sale_line.is_none() && regular_line.is_none()) {
            return Prices {
                on_request: true,
                ..Prices::default()
            };
        }

        Prices {
            sale: sale_line.and_then(field_value).and_then(|v| self.normalize(v)),
            regular: regular_line.and_then(field_value).and_then(|v| self.normalize(v)),
            on_request: false,
        }
    }

    /// Normalizes a raw price to whole dollars.
    ///
    /// Thousands separators and currency symbols are dropped. A `k` suffix, or a
    /// value under 1000, means thousands. Returns `None` when no number leads the
    /// text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use catalogpack::extract::PriceReader;
    ///
    /// let prices = PriceReader::new()?;
    /// assert_eq!(prices.normalize("2.5k").as_deref(), Some("2500"));
    /// assert_eq!(prices.normalize("800").as_deref(), Some("800000"));
    /// assert_eq!(prices.normalize("$12,400").as_deref(), Some("12400"));
    /// assert_eq!(prices.normalize("ask"), None);
    /// # Ok::<(), catalogpack::CatalogError>(())
    /// ```
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let cleaned: String = raw
            .chars()
            .filter(|c| !matches!(c, ',' | '$' | '€' | '£'))
            .collect::<String>()
            .to_lowercase();

        let thousands = cleaned.contains('k');
        let without_suffix = cleaned.replacen('k', "", 1);
        let number: f64 = self.number.find(without_suffix.trim())?.as_str().parse().ok()?;

        let dollars = if thousands || number < 1000.0 {
            number * 1000.0
        } else {
            number
        };

        #[allow(clippy::cast_possible_truncation)]
        let rounded = dollars.round() as i64;
        Some(rounded.to_string())
    }
}

fn find_line<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    text.lines().find(|line| line.to_lowercase().contains(key))
}

/// Text between the first and second colon.
fn field_value(line: &str) -> Option<&str> {
    line.split(':').nth(1).map(str::trim)
}
