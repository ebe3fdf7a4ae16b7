//! Diff engine composing the full pipeline
//!
//! Split, normalize, build the LCS table, backtrack. Strictly
//! sequential and synchronous; each call owns its own table and result
//! exclusively, so engines are safe to share across call sites without
//! locking.

use tracing::trace;

use crate::algorithms::{backtrack, LcsTable};
use crate::diff::DiffResult;
use crate::document::Document;
use crate::options::DiffOptions;

/// The line diff engine.
///
/// Holds the normalization options and runs the full pipeline on every
/// call; no state survives between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine {
    options: DiffOptions,
}

impl DiffEngine {
    /// Create an engine with the given options.
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    /// The options this engine compares with.
    pub fn options(&self) -> DiffOptions {
        self.options
    }

    /// Diff two strings line by line.
    ///
    /// Splits both inputs on `'\n'` (see [`Document::parse`] for the
    /// exact behavior) and aligns the resulting line sequences.
    pub fn diff(&self, original: &str, modified: &str) -> DiffResult {
        self.diff_documents(&Document::parse(original), &Document::parse(modified))
    }

    /// Diff two documents that are already split into lines.
    pub fn diff_documents(&self, original: &Document, modified: &Document) -> DiffResult {
        trace!(
            source_lines = original.len(),
            target_lines = modified.len(),
            "computing line diff"
        );

        let keys_a = original.comparison_keys(&self.options);
        let keys_b = modified.comparison_keys(&self.options);

        let table = LcsTable::build(&keys_a, &keys_b);
        let operations = backtrack(&table, original, modified, &keys_a, &keys_b);

        trace!(operations = operations.len(), "line diff complete");
        DiffResult::new(operations)
    }
}
