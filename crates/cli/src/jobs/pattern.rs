//! Literal search patterns.

use regex::Regex;

/// A search string compiled for literal substring matching.
///
/// Every regex metacharacter in the input is escaped, so `a.b*` only matches
/// the text `a.b*`.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    regex: Regex,
    empty: bool,
}

impl SearchPattern {
    /// Build a pattern from a raw search string.
    ///
    /// With `ignore_case` the pattern carries the inline `(?i)` flag.
    ///
    /// # Errors
    ///
    /// Fails only if the escaped pattern exceeds the regex size limit.
    pub fn new(search: &str, ignore_case: bool) -> Result<Self, regex::Error> {
        let mut pattern = regex::escape(search);
        if ignore_case {
            pattern.insert_str(0, "(?i)");
        }
        Ok(Self {
            regex: Regex::new(&pattern)?,
            empty: search.is_empty(),
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// True for an empty search string, which matches everything.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
