//! Hardware finish, from abbreviations (`GHW`, `PHW`...) or spelled out.

use std::ops::Range;

use regex::Regex;

use crate::error::Result;
use crate::listing::Hardware;

// Rose and brushed gold come before plain gold so "Rose Gold Hardware" is not
// read as "Gold Hardware".
const HARDWARE_RULES: &[(Hardware, &str)] = &[
    (Hardware::RoseGold, r"(?i)\b(?:rghw|rose gold hardware)\b"),
    (Hardware::BrushedGold, r"(?i)\b(?:bghw|brushed gold hardware)\b"),
    (Hardware::Palladium, r"(?i)\b(?:phw|palladium hardware)\b"),
    (Hardware::Gold, r"(?i)\b(?:ghw|gold hardware)\b"),
];

#[derive(Debug, Clone)]
pub struct HardwareRecognizer {
    rules: Vec<(Hardware, Regex)>,
}

impl HardwareRecognizer {
    pub fn new() -> Result<Self> {
        let rules = HARDWARE_RULES
            .iter()
            .map(|&(hardware, pattern)| Ok((hardware, Regex::new(pattern)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Returns the finish and the byte range it was read from.
    pub fn find(&self, headline: &str) -> Option<(Hardware, Range<usize>)> {
        self.rules.iter().find_map(|(hardware, regex)| {
            regex.find(headline).map(|m| (*hardware, m.range()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(text: &str) -> Option<(Hardware, &str)> {
        HardwareRecognizer::new()
            .unwrap()
            .find(text)
            .map(|(hardware, span)| (hardware, &text[span]))
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(find("B30 Gold Epsom GHW"), Some((Hardware::Gold, "GHW")));
        assert_eq!(find("K25 Noir phw"), Some((Hardware::Palladium, "phw")));
        assert_eq!(find("C18 Craie RGHW"), Some((Hardware::RoseGold, "RGHW")));
        assert_eq!(find("B25 Etoupe BGHW"), Some((Hardware::BrushedGold, "BGHW")));
    }

    #[test]
    fn test_spelled_out() {
        assert_eq!(
            find("K25 Gold Togo Rose Gold Hardware"),
            Some((Hardware::RoseGold, "Rose Gold Hardware"))
        );
        assert_eq!(
            find("B30 palladium hardware"),
            Some((Hardware::Palladium, "palladium hardware"))
        );
    }

    #[test]
    fn test_no_hardware() {
        assert_eq!(find("B30 Gold Epsom"), None);
        assert_eq!(find("GHWX"), None);
    }
}
