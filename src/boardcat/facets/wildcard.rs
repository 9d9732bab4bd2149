//! Wildcard patterns for compatible strings.
//!
//! `*` matches any run of characters (including none); every other character
//! is literal. Matching is case-insensitive and anchored at both ends.

use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
pub struct WildcardPattern {
    regex: Regex,
}

impl WildcardPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let body = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        let regex = RegexBuilder::new(&format!("^{}$", body))
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()?;

        Ok(Self { regex })
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// True if any of the candidates match.
    pub fn matches_any<'a, I>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        candidates.into_iter().any(|c| self.is_match(c))
    }
}
