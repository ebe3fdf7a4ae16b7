//! Normalization options for line comparison

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Options controlling how lines are normalized before comparison.
///
/// Normalization only affects the equality test used by the diff
/// algorithm; the content carried in results is always the original,
/// unnormalized line text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Trim leading and trailing whitespace before comparing.
    /// Interior whitespace is not collapsed.
    pub ignore_whitespace: bool,

    /// Lowercase lines before comparing.
    pub ignore_case: bool,
}

impl DiffOptions {
    /// Create options with both switches off (exact comparison).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to trim whitespace before comparing.
    pub fn with_ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    /// Set whether to lowercase before comparing.
    pub fn with_ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    /// Normalize a single line for comparison: trim first, then
    /// lowercase. Returns a borrow when no transformation applies.
    pub fn normalize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let trimmed = if self.ignore_whitespace {
            line.trim()
        } else {
            line
        };

        if self.ignore_case {
            Cow::Owned(trimmed.to_lowercase())
        } else {
            Cow::Borrowed(trimmed)
        }
    }
}
