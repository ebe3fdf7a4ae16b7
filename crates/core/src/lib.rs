//! # linewise
//!
//! Line-based text diffing built on a longest-common-subsequence
//! alignment with configurable normalization.
//!
//! ## Core Concepts
//!
//! - **Document**: an input string split into an ordered line sequence
//! - **DiffOptions**: whitespace/case normalization applied to the
//!   equality test only, never to emitted content
//! - **DiffEngine**: composes split, LCS table, and backtracking into
//!   one pure computation
//! - **Projections**: split (two-column) and unified (interleaved)
//!   arrangements of the same result
//!
//! ## Example
//!
//! ```rust
//! use linewise_core::{diff, DiffOptions};
//!
//! let result = diff("line1\nline2\nline3", "line1\nlineX\nline3", DiffOptions::default());
//!
//! let summary = result.summary();
//! assert_eq!(summary.added, 1);
//! assert_eq!(summary.removed, 1);
//! assert_eq!(summary.unchanged, 2);
//! ```

pub mod cache;
pub mod diff;
pub mod document;
pub mod engine;
pub mod options;
pub mod render;

mod algorithms;

// Re-export main types
pub use cache::DiffCache;
pub use diff::{ChangeKind, DiffOperation, DiffResult, DiffSummary};
pub use document::Document;
pub use engine::DiffEngine;
pub use options::DiffOptions;
pub use render::{SplitRow, SplitView, UnifiedRow, UnifiedView};

/// Diff two strings line by line.
///
/// Splits each input on `'\n'`, aligns the line sequences with an LCS
/// dynamic program, and classifies every line as added, removed, or
/// unchanged. Equality is evaluated on lines normalized per `options`;
/// emitted content is always the original text.
///
/// Every call recomputes from scratch. Callers diffing on each
/// keystroke should go through [`DiffCache`] instead.
///
/// # Example
///
/// ```rust
/// use linewise_core::{diff, DiffOptions};
///
/// let options = DiffOptions::new().with_ignore_case(true);
/// let result = diff("Hello", "hello", options);
/// assert!(result.is_identical());
/// ```
pub fn diff(original: &str, modified: &str, options: DiffOptions) -> DiffResult {
    DiffEngine::new(options).diff(original, modified)
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use crate::{diff, DiffOptions};

    fn multiline_string() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z A-Z]{0,16}", 1..10).prop_map(|lines| lines.join("\n"))
    }

    fn any_options() -> impl Strategy<Value = DiffOptions> {
        (any::<bool>(), any::<bool>()).prop_map(|(ignore_whitespace, ignore_case)| DiffOptions {
            ignore_whitespace,
            ignore_case,
        })
    }

    proptest! {
        /// Diffing a text against itself yields only Unchanged
        /// operations, one per line, with matching line numbers.
        #[test]
        fn identity_diff_is_all_unchanged(text in multiline_string()) {
            let result = diff(&text, &text, DiffOptions::default());

            prop_assert!(result.is_identical());
            prop_assert_eq!(result.len(), text.split('\n').count());
            for op in &result {
                prop_assert_eq!(op.source_line(), op.target_line());
            }
        }

        /// Source line numbers across Unchanged+Removed reproduce
        /// 1..=m in emission order; target line numbers across
        /// Unchanged+Added reproduce 1..=n.
        #[test]
        fn line_numbers_cover_both_documents(
            original in multiline_string(),
            modified in multiline_string(),
            options in any_options()
        ) {
            let result = diff(&original, &modified, options);

            let sources: Vec<usize> = result.iter().filter_map(|op| op.source_line()).collect();
            let targets: Vec<usize> = result.iter().filter_map(|op| op.target_line()).collect();

            let m = original.split('\n').count();
            let n = modified.split('\n').count();
            prop_assert_eq!(sources, (1..=m).collect::<Vec<_>>());
            prop_assert_eq!(targets, (1..=n).collect::<Vec<_>>());
        }

        /// Identical inputs and options always produce identical
        /// output.
        #[test]
        fn diff_is_deterministic(
            original in multiline_string(),
            modified in multiline_string(),
            options in any_options()
        ) {
            let first = diff(&original, &modified, options);
            let second = diff(&original, &modified, options);
            prop_assert_eq!(first, second);
        }

        /// Summary counts partition the operation sequence.
        #[test]
        fn summary_counts_match_operations(
            original in multiline_string(),
            modified in multiline_string(),
            options in any_options()
        ) {
            let result = diff(&original, &modified, options);
            let summary = result.summary();
            prop_assert_eq!(summary.added + summary.removed + summary.unchanged, result.len());
        }
    }
}
