//! Condition detection.
//!
//! Rules, first hit wins, all case-insensitive over the whole block:
//!
//! 1. `unused` anywhere → New (Unused)
//! 2. leftmost verbatim condition label → that label
//! 3. `excellent` → Like New Excellent
//! 4. `new` → Brand New
//! 5. otherwise Brand New

use regex::Regex;

use crate::error::Result;
use crate::listing::{Condition, ConditionOrigin};

#[derive(Debug, Clone)]
pub struct ConditionDetector {
    unused: Regex,
    phrases: Vec<(Condition, Regex)>,
    excellent: Regex,
    new_word: Regex,
}

impl ConditionDetector {
    pub fn new() -> Result<Self> {
        let phrases = Condition::ALL
            .into_iter()
            .map(|condition| {
                let pattern = format!(r"(?i)\b{}", regex::escape(condition.label()));
                Ok((condition, Regex::new(&pattern)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            unused: Regex::new(r"(?i)\bunused\b|\(\s*unused\s*\)")?,
            phrases,
            excellent: Regex::new(r"(?i)\bexcellent\b")?,
            new_word: Regex::new(r"(?i)\bnew\b")?,
        })
    }

    /// Resolves the condition of a listing. Never fails.
    pub fn detect(&self, text: &str) -> (Condition, ConditionOrigin) {
        if self.unused.is_match(text) {
            return (Condition::NewUnused, ConditionOrigin::UnusedKeyword);
        }

        if let Some(condition) = self.leftmost_phrase(text) {
            return (condition, ConditionOrigin::ExactPhrase);
        }

        if self.excellent.is_match(text) {
            return (Condition::LikeNewExcellent, ConditionOrigin::Excellent);
        }

        if self.new_word.is_match(text) {
            return (Condition::BrandNew, ConditionOrigin::NewKeyword);
        }

        (Condition::BrandNew, ConditionOrigin::Default)
    }

    /// Earliest label occurrence not followed by a word character. Labels
    /// starting at the same offset are tried in [`Condition::ALL`] order.
    fn leftmost_phrase(&self, text: &str) -> Option<Condition> {
        self.phrases
            .iter()
            .enumerate()
            .filter_map(|(rank, (condition, regex))| {
                regex
                    .find_iter(text)
                    .find(|m| !text[m.end()..].chars().next().is_some_and(is_word_char))
                    .map(|m| (m.start(), rank, *condition))
            })
            .min()
            .map(|(_, _, condition)| condition)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
