//! Read-only view projections over a diff result
//!
//! Split and unified arrangements are projections of the same
//! operation sequence, not separate computations. Rows borrow their
//! content from the result they project.

use std::fmt;

use crate::diff::{ChangeKind, DiffOperation, DiffResult};

/// One row of a split-view column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRow<'a> {
    pub kind: ChangeKind,
    pub content: &'a str,
    /// 1-based line number in this column's document.
    pub line_number: usize,
}

/// Two-column arrangement: original document lines on the left,
/// modified on the right.
///
/// The left column excludes `Added` operations and numbers rows by
/// source line; the right column excludes `Removed` and numbers rows
/// by target line. Unchanged lines appear in both columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitView<'a> {
    pub left: Vec<SplitRow<'a>>,
    pub right: Vec<SplitRow<'a>>,
}

impl<'a> SplitView<'a> {
    /// Project a result into its two columns.
    pub fn project(result: &'a DiffResult) -> Self {
        let mut left = Vec::new();
        let mut right = Vec::new();

        for op in result {
            match op {
                DiffOperation::Unchanged {
                    content,
                    source_line,
                    target_line,
                } => {
                    left.push(SplitRow {
                        kind: ChangeKind::Unchanged,
                        content,
                        line_number: *source_line,
                    });
                    right.push(SplitRow {
                        kind: ChangeKind::Unchanged,
                        content,
                        line_number: *target_line,
                    });
                }
                DiffOperation::Removed {
                    content,
                    source_line,
                } => {
                    left.push(SplitRow {
                        kind: ChangeKind::Removed,
                        content,
                        line_number: *source_line,
                    });
                }
                DiffOperation::Added {
                    content,
                    target_line,
                } => {
                    right.push(SplitRow {
                        kind: ChangeKind::Added,
                        content,
                        line_number: *target_line,
                    });
                }
            }
        }

        Self { left, right }
    }
}

/// One row of the unified arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnifiedRow<'a> {
    pub kind: ChangeKind,
    /// `'+'`, `'-'`, or `' '`.
    pub marker: char,
    pub content: &'a str,
}

/// Single-column arrangement interleaving all operations in emission
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedView<'a> {
    pub rows: Vec<UnifiedRow<'a>>,
}

impl<'a> UnifiedView<'a> {
    /// Project a result into marker-prefixed rows.
    pub fn project(result: &'a DiffResult) -> Self {
        let rows = result
            .iter()
            .map(|op| UnifiedRow {
                kind: op.kind(),
                marker: op.marker(),
                content: op.content(),
            })
            .collect();

        Self { rows }
    }
}

impl fmt::Display for UnifiedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{} {}", row.marker, row.content)?;
        }
        Ok(())
    }
}
