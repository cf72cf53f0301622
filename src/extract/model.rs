//! Model recognition.
//!
//! Two ordered rule lists. The coarse [`ModelTag`] is looked up in the whole
//! block; the size-qualified model (`Birkin 30`, `Kelly Pochette`) only in
//! the cleaned headline. First rule that matches wins in both.

use std::ops::Range;

use regex::Regex;

use crate::error::Result;
use crate::listing::ModelTag;

const TAG_RULES: &[(ModelTag, &str)] = &[
    (ModelTag::HacADos, r"(?i)\bhac\s*(?:à|a)\s*dos\b"),
    (ModelTag::Birkin, r"(?i)\bbirkin\b|\bb\d{1,2}\b"),
    (ModelTag::Kelly, r"(?i)\bkelly\b|\bkp\b|\bk\d{1,2}\b"),
    (ModelTag::Constance, r"(?i)\bconstance\b|\bc\d{1,2}\b"),
    (ModelTag::Lindy, r"(?i)\blindy\b"),
    (ModelTag::Bolide, r"(?i)\bbolide\b"),
];

/// Family name and pattern. A capture group, when present, holds the size.
const MODEL_RULES: &[(&str, &str)] = &[
    ("Kelly Pochette", r"(?i)\b(?:KP|Kelly\s+Pochette)\b"),
    ("Birkin", r"(?i)\bBirkin\s+(\d{1,2})\b"),
    ("Kelly", r"(?i)\bKelly\s+(\d{1,2})\b"),
    ("Constance", r"(?i)\bConstance\s+(\d{1,2})\b"),
    ("Kelly", r"(?i)\bK(\d{1,2})\b"),
    ("Birkin", r"(?i)\bB(\d{1,2})\b"),
    ("Constance", r"(?i)\bC(\d{1,2})\b"),
];

/// A recognized model and the byte range of the headline it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMatch {
    pub model: String,
    pub span: Range<usize>,
}

#[derive(Debug, Clone)]
pub struct ModelRecognizer {
    tags: Vec<(ModelTag, Regex)>,
    models: Vec<(&'static str, Regex)>,
}

impl ModelRecognizer {
    pub fn new() -> Result<Self> {
        let tags = TAG_RULES
            .iter()
            .map(|&(tag, pattern)| Ok((tag, Regex::new(pattern)?)))
            .collect::<Result<Vec<_>>>()?;
        let models = MODEL_RULES
            .iter()
            .map(|&(family, pattern)| Ok((family, Regex::new(pattern)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tags, models })
    }

    pub fn tag(&self, text: &str) -> Option<ModelTag> {
        self.tags
            .iter()
            .find(|(_, regex)| regex.is_match(text))
            .map(|(tag, _)| *tag)
    }

    pub fn model(&self, headline: &str) -> Option<ModelMatch> {
        self.models.iter().find_map(|(family, regex)| {
            let caps = regex.captures(headline)?;
            let whole = caps.get(0)?;
            let model = match caps.get(1) {
                Some(size) => format!("{family} {}", size.as_str()),
                None => (*family).to_string(),
            };
            Some(ModelMatch {
                model: title_case(&model),
                span: whole.range(),
            })
        })
    }
}

/// Uppercases the first character of every space-separated word and
/// lowercases the rest.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
