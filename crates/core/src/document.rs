//! Line splitting
//!
//! Turns an input string into the ordered line sequence the diff
//! algorithm aligns. Splitting is deliberately naive: `'\n'` is the
//! only delimiter, so `\r\n` line endings leave the `'\r'` embedded in
//! line content. Existing consumers depend on that behavior, so it is
//! kept as-is rather than corrected.

use std::borrow::Cow;
use std::ops::Index;

use crate::options::DiffOptions;

/// An ordered sequence of raw lines from one input document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split `text` on `'\n'` into a document.
    ///
    /// An empty input yields a single empty line, and a trailing
    /// `'\n'` yields a trailing empty line, exactly as splitting on
    /// the delimiter behaves. Carriage returns are not stripped.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
        }
    }

    /// A document with no lines at all.
    ///
    /// [`Document::parse`] never produces this (the empty string still
    /// splits into one empty line); it exists for callers assembling
    /// documents line by line.
    pub fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    /// Build a document from an explicit line sequence.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// A single line by 0-based index.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Per-line comparison keys under the given options, computed once
    /// so the table builder does not re-normalize inside its loop.
    pub(crate) fn comparison_keys(&self, options: &DiffOptions) -> Vec<Cow<'_, str>> {
        self.lines.iter().map(|line| options.normalize(line)).collect()
    }
}

impl Index<usize> for Document {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lines[index]
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}
