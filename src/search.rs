//! Fuzzy matching for table filtering.
//!
//! Wraps the matcher implementation so the rest of the codebase is not tied
//! to a specific fuzzy-matching crate.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Case-insensitive fuzzy matcher used by the dashboard tables.
pub struct Matcher {
    inner: SkimMatcherV2,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: SkimMatcherV2::default(),
        }
    }

    /// Whether the pattern fuzzy-matches the text. Matching is
    /// case-insensitive and allows non-consecutive characters, so "plm"
    /// matches "Plumbing" and "inprog" matches "in_progress".
    #[must_use]
    pub fn matches(&self, text: &str, pattern: &str) -> bool {
        let pattern = pattern.to_lowercase();
        self.inner.fuzzy_match(text, &pattern).is_some()
    }

    /// Whether any of the given texts match the pattern.
    pub fn matches_any<'a>(&self, texts: impl IntoIterator<Item = &'a str>, pattern: &str) -> bool {
        texts.into_iter().any(|text| self.matches(text, pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_match() {
        let matcher = Matcher::new();

        assert!(matcher.matches("Plumbing", "plm"));
        assert!(matcher.matches("electrical_repair", "elrep"));
        assert!(matcher.matches("in_progress", "inprog"));

        // Case-insensitive both ways
        assert!(matcher.matches("HVAC", "hvac"));
        assert!(matcher.matches("hvac", "HVAC"));

        assert!(!matcher.matches("plumbing", "xyz"));
    }

    #[test]
    fn test_matches_any() {
        let matcher = Matcher::new();
        let fields = ["Leaky faucet", "plumbing", "john_doe"];
        assert!(matcher.matches_any(fields, "faucet"));
        assert!(matcher.matches_any(fields, "john"));
        assert!(!matcher.matches_any(fields, "roof"));
    }
}
