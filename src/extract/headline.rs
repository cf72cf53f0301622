//! Headline cleaning.
//!
//! Strips the words that are reported in their own columns (condition,
//! receipt status) plus dates, so what remains is model, colour, leather,
//! hardware and stamp.

use regex::Regex;

use crate::error::Result;

const PARENTHESIZED_CONDITION: &str = r"(?i)\(\s*(?:Used|Unused|Like New|Preowned|Excellent|New)\s*\)";
const CONDITION_WORDS: &str = r"(?i)\b(?:Brand New|Like New Excellent|Like New|Preowned|New|Excellent|Used|Pristine|Mint Condition|Unused)\b";
const RECEIPT_WORDS: &str = r"(?i)\s*[-–—:|/]*\s*(?:full set|with receipt|w/o receipt|without receipt|no receipt)\b";
const DATES: &str = r"\b(?:\d{1,2}/20\d{2}|20\d{2}/\d{1,2}|20\d{2})\b";
const LEADING_SEPARATORS: &str = r"^\s*(?:[-–—:|]\s*)+";
const TRAILING_SEPARATORS: &str = r"\s*(?:[-–—:|]\s*)+$";
const WHITESPACE_RUN: &str = r"\s{2,}";

/// Ordered removal passes. Each pass runs on the output of the previous one.
#[derive(Debug, Clone)]
pub struct HeadlineCleaner {
    removals: Vec<Regex>,
    whitespace: Regex,
}

impl HeadlineCleaner {
    pub fn new() -> Result<Self> {
        // Parenthesized words go first, otherwise "(Unused)" would be reduced
        // to a bare "()" by the condition pass.
        let removals = [
            PARENTHESIZED_CONDITION,
            CONDITION_WORDS,
            RECEIPT_WORDS,
            DATES,
            LEADING_SEPARATORS,
            TRAILING_SEPARATORS,
        ]
        .into_iter()
        .map(Regex::new)
        .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            removals,
            whitespace: Regex::new(WHITESPACE_RUN)?,
        })
    }

    /// Cleans a headline. The result is trimmed and has no runs of spaces.
    ///
    /// # Example
    ///
    /// ```rust
    /// use catalogpack::extract::HeadlineCleaner;
    ///
    /// let cleaner = HeadlineCleaner::new()?;
    /// assert_eq!(
    ///     cleaner.clean("Like New – K28 Noir Togo GHW - Full set with receipt 2023"),
    ///     "K28 Noir Togo GHW"
    /// );
    /// # Ok::<(), catalogpack::CatalogError>(())
    /// ```
    pub fn clean(&self, headline: &str) -> String {
        let mut text = headline.to_string();
        for regex in &self.removals {
            text = regex.replace_all(&text, "").into_owned();
        }
        self.whitespace.replace_all(&text, " ").trim().to_string()
    }
}

/// Collapses every whitespace run to one space and trims.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(text: &str) -> String {
        HeadlineCleaner::new().unwrap().clean(text)
    }

    #[test]
    fn test_plain_headline_unchanged() {
        assert_eq!(clean("B30 Gold Epsom GHW Stamp W"), "B30 Gold Epsom GHW Stamp W");
    }

    #[test]
    fn test_condition_words_removed() {
        assert_eq!(clean("Brand New K25 Noir Togo"), "K25 Noir Togo");
        assert_eq!(clean("K25 Noir Togo pristine"), "K25 Noir Togo");
        assert_eq!(clean("Mint Condition B30 Etoupe"), "B30 Etoupe");
    }

    #[test]
    fn test_parenthesized_condition_removed() {
        assert_eq!(clean("K25 Gold Togo (Unused)"), "K25 Gold Togo");
        assert_eq!(clean("K25 Gold Togo ( like new )"), "K25 Gold Togo");
    }

    #[test]
    fn test_receipt_words_removed_with_separator() {
        assert_eq!(clean("B25 Noir Togo - Full set with receipt"), "B25 Noir Togo");
        assert_eq!(clean("B25 Noir Togo | full set no receipt"), "B25 Noir Togo");
        assert_eq!(clean("B25 Noir Togo w/o receipt"), "B25 Noir Togo");
    }

    #[test]
    fn test_dates_removed() {
        assert_eq!(clean("B25 Noir Togo 2024"), "B25 Noir Togo");
        assert_eq!(clean("B25 Noir Togo 08/2024"), "B25 Noir Togo");
        assert_eq!(clean("B25 Noir Togo 2024/08"), "B25 Noir Togo");
        assert_eq!(clean("Kelly 20 Mini Noir"), "Kelly 20 Mini Noir");
    }

    #[test]
    fn test_edge_separators_removed() {
        assert_eq!(clean("Like New – K28 Noir"), "K28 Noir");
        assert_eq!(clean(" - : K28 Noir | "), "K28 Noir");
    }

    #[test]
    fn test_inner_separators_kept() {
        assert_eq!(clean("B30 - Gold Epsom - GHW"), "B30 - Gold Epsom - GHW");
    }

    #[test]
    fn test_only_noise_becomes_empty() {
        assert_eq!(clean("Brand New - Full set 2024"), "");
        assert_eq!(clean("   "), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Birkin 30   Gold\tEpsom "), "Birkin 30 Gold Epsom");
        assert_eq!(collapse_whitespace(""), "");
    }
}
