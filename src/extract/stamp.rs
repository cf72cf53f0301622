//! Stamp letter and year.
//!
//! `Stamp W`, `stamp w 24`, `Stamp W/2024` are read as keyword stamps. A
//! headline that instead ends with a lone capital letter (`... Epsom GHW W`)
//! is read as a stamp too, flagged [`StampOrigin::TrailingLetter`].

use std::ops::Range;

use regex::Regex;

use crate::config::StampYearTable;
use crate::error::Result;
use crate::listing::{Stamp, StampOrigin, YearSource};

const KEYWORD_PATTERN: &str = r"(?i)\bStamp\s+([A-Z])\b(?:\s*/?\s*(\d{4}|\d{2})\b)?";

// Case-sensitive: a lowercase trailing word of one letter is not a stamp.
const TRAILING_PATTERN: &str = r"\b([A-Z])\b\s*(20\d{2})?\s*$";

#[derive(Debug, Clone)]
pub struct StampRecognizer {
    keyword: Regex,
    trailing: Regex,
}

impl StampRecognizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            keyword: Regex::new(KEYWORD_PATTERN)?,
            trailing: Regex::new(TRAILING_PATTERN)?,
        })
    }

    /// Finds the stamp in a cleaned headline, with the byte range of the whole
    /// stamp expression (keyword, letter and year).
    ///
    /// A missing year is filled from `years`; letters not in the table keep
    /// `year: None`.
    pub fn find(&self, headline: &str, years: &StampYearTable) -> Option<(Stamp, Range<usize>)> {
        let (caps, origin) = match self.keyword.captures(headline) {
            Some(caps) => (caps, StampOrigin::Keyword),
            None => (self.trailing.captures(headline)?, StampOrigin::TrailingLetter),
        };

        let letter = caps.get(1)?.as_str().chars().next()?.to_ascii_uppercase();
        let explicit = caps.get(2).and_then(|m| parse_year(m.as_str()));

        let (year, year_source) = match explicit {
            Some(year) => (Some(year), Some(YearSource::Explicit)),
            None => match years.year_for(letter) {
                Some(year) => (Some(year), Some(YearSource::Table)),
                None => (None, None),
            },
        };

        let stamp = Stamp {
            letter,
            year,
            year_source,
            origin,
        };
        Some((stamp, caps.get(0)?.range()))
    }
}

/// `24` → 2024, `2024` → 2024.
fn parse_year(digits: &str) -> Option<u16> {
    let value: u16 = digits.parse().ok()?;
    match digits.len() {
        2 => Some(2000 + value),
        4 => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(text: &str) -> Option<(Stamp, &str)> {
        StampRecognizer::new()
            .unwrap()
            .find(text, &StampYearTable::default())
            .map(|(stamp, span)| (stamp, &text[span]))
    }

    #[test]
    fn test_keyword_with_table_year() {
        let (stamp, matched) = find("B30 Gold Epsom GHW Stamp W").unwrap();
        assert_eq!(stamp.letter, 'W');
        assert_eq!(stamp.year, Some(2024));
        assert_eq!(stamp.year_source, Some(YearSource::Table));
        assert_eq!(stamp.origin, StampOrigin::Keyword);
        assert_eq!(matched, "Stamp W");
    }

    #[test]
    fn test_keyword_lowercase_letter() {
        let (stamp, _) = find("K25 Noir stamp b").unwrap();
        assert_eq!(stamp.letter, 'B');
        assert_eq!(stamp.year, Some(2023));
    }

    #[test]
    fn test_keyword_explicit_years() {
        let (stamp, matched) = find("K25 Noir Stamp Z/21").unwrap();
        assert_eq!(stamp.year, Some(2021));
        assert_eq!(stamp.year_source, Some(YearSource::Explicit));
        assert_eq!(matched, "Stamp Z/21");

        let (stamp, _) = find("K25 Noir Stamp U 2022").unwrap();
        assert_eq!(stamp.year, Some(2022));
    }

    #[test]
    fn test_trailing_letter() {
        let (stamp, matched) = find("B25 Noir Togo PHW B").unwrap();
        assert_eq!(stamp.letter, 'B');
        assert_eq!(stamp.origin, StampOrigin::TrailingLetter);
        assert_eq!(stamp.year, Some(2023));
        assert_eq!(matched, "B");
    }

    #[test]
    fn test_trailing_letter_span_is_at_line_end() {
        let headline = "Birkin 25 Black Togo PHW B";
        let (_, span) = StampRecognizer::new()
            .unwrap()
            .find(headline, &StampYearTable::default())
            .unwrap();
        assert_eq!(span, 25..26);
    }

    #[test]
    fn test_trailing_lowercase_is_not_a_stamp() {
        assert!(find("Kelly 25 gold a").is_none());
    }

    #[test]
    fn test_keyword_wins_over_trailing() {
        let (stamp, _) = find("Stamp W Gold Togo K").unwrap();
        assert_eq!(stamp.letter, 'W');
        assert_eq!(stamp.origin, StampOrigin::Keyword);
    }

    #[test]
    fn test_unknown_letter_has_no_year() {
        let (stamp, _) = find("B30 Noir Stamp Q").unwrap();
        assert_eq!(stamp.letter, 'Q');
        assert_eq!(stamp.year, None);
        assert_eq!(stamp.year_source, None);
    }

    #[test]
    fn test_no_stamp() {
        assert!(find("B30 Gold Epsom GHW").is_none());
        assert!(find("").is_none());
    }
}
