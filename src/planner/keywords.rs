use regex::{Regex, RegexBuilder};

use crate::config::PlannerConfig;
use crate::error::Result;

/// Case-insensitive substring matcher over a keyword list.
///
/// An empty list matches nothing.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    pattern: Option<Regex>,
}

impl KeywordMatcher {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self> {
        let alternatives: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim())
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = RegexBuilder::new(&alternatives.join("|"))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Matcher for a named keyword set, honoring config overrides.
    pub fn from_config(config: &PlannerConfig, set_name: &str) -> Result<Self> {
        Self::new(&config.keywords(set_name))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|p| p.is_match(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_case_insensitive() {
        let matcher = KeywordMatcher::new(&["chicken", "ham"]).unwrap();
        assert!(matcher.is_match("Grilled CHICKEN Breast"));
        assert!(matcher.is_match("Ham & Swiss"));
        assert!(matcher.is_match("Graham Crackers")); // substring, by construction
        assert!(!matcher.is_match("Tofu Stir Fry"));
    }

    #[test]
    fn test_keywords_are_literal() {
        let matcher = KeywordMatcher::new(&["a.b", "(x)"]).unwrap();
        assert!(matcher.is_match("A.B"));
        assert!(!matcher.is_match("axb"));
        assert!(matcher.is_match("item (x)"));
    }

    #[test]
    fn test_empty_matches_nothing() {
        let empty: [&str; 0] = [];
        let matcher = KeywordMatcher::new(&empty).unwrap();
        assert!(!matcher.is_match("anything"));
        assert!(!matcher.is_match(""));

        let blanks = KeywordMatcher::new(&["  "]).unwrap();
        assert!(!blanks.is_match("anything"));
    }
}
