//! LCS table construction and backtracking
//!
//! The classic longest-common-subsequence dynamic program over two
//! line sequences, followed by a reverse walk over the table that
//! reconstructs the minimal edit script one line at a time.

use std::borrow::Cow;

use crate::diff::DiffOperation;
use crate::document::Document;

/// The (m+1) x (n+1) LCS length table over two line sequences.
pub(crate) struct LcsTable {
    cells: Vec<Vec<usize>>,
}

impl LcsTable {
    /// Build the full table over pre-normalized comparison keys.
    ///
    /// `cells[i][j]` holds the LCS length of `a[0..i]` and `b[0..j]`;
    /// row 0 and column 0 stay zero as the empty-prefix base case.
    /// O(m*n) time and space, and the dominant cost of a diff. The
    /// whole table is kept because backtracking walks it.
    pub(crate) fn build(a: &[Cow<'_, str>], b: &[Cow<'_, str>]) -> Self {
        let m = a.len();
        let n = b.len();
        let mut cells = vec![vec![0usize; n + 1]; m + 1];

        for i in 1..=m {
            for j in 1..=n {
                if a[i - 1] == b[j - 1] {
                    cells[i][j] = cells[i - 1][j - 1] + 1;
                } else {
                    cells[i][j] = cells[i - 1][j].max(cells[i][j - 1]);
                }
            }
        }

        Self { cells }
    }

    fn at(&self, i: usize, j: usize) -> usize {
        self.cells[i][j]
    }
}

/// Walk the table backward from `(m, n)`, emitting one operation per
/// line, then reverse into emission order.
///
/// Tie-break: when the horizontal and vertical neighbors hold the same
/// value, the `>=` prefers the horizontal move, so an Added operation
/// is emitted over a Removed one. Fixtures depend on this exact
/// choice; do not change it.
///
/// Total over any two finite line sequences: a zero-length side drains
/// entirely through the Added or Removed branch.
pub(crate) fn backtrack(
    table: &LcsTable,
    original: &Document,
    modified: &Document,
    keys_a: &[Cow<'_, str>],
    keys_b: &[Cow<'_, str>],
) -> Vec<DiffOperation> {
    let mut operations = Vec::with_capacity(original.len() + modified.len());
    let mut i = original.len();
    let mut j = modified.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && keys_a[i - 1] == keys_b[j - 1] {
            operations.push(DiffOperation::Unchanged {
                content: original.lines()[i - 1].clone(),
                source_line: i,
                target_line: j,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.at(i, j - 1) >= table.at(i - 1, j)) {
            operations.push(DiffOperation::Added {
                content: modified.lines()[j - 1].clone(),
                target_line: j,
            });
            j -= 1;
        } else {
            operations.push(DiffOperation::Removed {
                content: original.lines()[i - 1].clone(),
                source_line: i,
            });
            i -= 1;
        }
    }

    operations.reverse();
    operations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::ChangeKind;
    use crate::options::DiffOptions;

    fn run(original: &Document, modified: &Document) -> Vec<DiffOperation> {
        let options = DiffOptions::default();
        let a = original.comparison_keys(&options);
        let b = modified.comparison_keys(&options);
        let table = LcsTable::build(&a, &b);
        backtrack(&table, original, modified, &a, &b)
    }

    #[test]
    fn test_table_base_cases_are_zero() {
        let a = Document::parse("x\ny");
        let b = Document::parse("x");
        let options = DiffOptions::default();
        let table = LcsTable::build(
            &a.comparison_keys(&options),
            &b.comparison_keys(&options),
        );

        for i in 0..=2 {
            assert_eq!(table.at(i, 0), 0);
        }
        assert_eq!(table.at(0, 1), 0);
    }

    #[test]
    fn test_table_lcs_length() {
        let a = Document::parse("a\nb\nc\nd");
        let b = Document::parse("b\nd");
        let options = DiffOptions::default();
        let table = LcsTable::build(
            &a.comparison_keys(&options),
            &b.comparison_keys(&options),
        );

        assert_eq!(table.at(4, 2), 2);
    }

    #[test]
    fn test_single_line_replace_emits_removed_then_added() {
        let ops = run(&Document::parse("a"), &Document::parse("b"));

        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].kind(), ChangeKind::Removed);
        assert_eq!(ops[0].content(), "a");
        assert_eq!(ops[1].kind(), ChangeKind::Added);
        assert_eq!(ops[1].content(), "b");
    }

    #[test]
    fn test_empty_original_document_is_all_added() {
        let ops = run(&Document::empty(), &Document::parse("a\nb\nc"));

        assert_eq!(ops.len(), 3);
        assert!(ops.iter().all(|op| op.kind() == ChangeKind::Added));
        let targets: Vec<usize> = ops.iter().filter_map(|op| op.target_line()).collect();
        assert_eq!(targets, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_modified_document_is_all_removed() {
        let ops = run(&Document::parse("a\nb"), &Document::empty());

        assert_eq!(ops.len(), 2);
        assert!(ops.iter().all(|op| op.kind() == ChangeKind::Removed));
        let sources: Vec<usize> = ops.iter().filter_map(|op| op.source_line()).collect();
        assert_eq!(sources, vec![1, 2]);
    }

    #[test]
    fn test_both_documents_empty() {
        let ops = run(&Document::empty(), &Document::empty());
        assert!(ops.is_empty());
    }

    #[test]
    fn test_unchanged_lines_anchor_both_sides() {
        let ops = run(
            &Document::parse("keep\nold\nkeep2"),
            &Document::parse("keep\nnew\nkeep2"),
        );

        let kinds: Vec<ChangeKind> = ops.iter().map(|op| op.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ChangeKind::Unchanged,
                ChangeKind::Removed,
                ChangeKind::Added,
                ChangeKind::Unchanged,
            ]
        );
    }

    #[test]
    fn test_shifted_lines_are_not_marked() {
        // Inserting at the top must not disturb the rest.
        let ops = run(
            &Document::parse("a\nb\nc"),
            &Document::parse("new\na\nb\nc"),
        );

        assert_eq!(ops[0].kind(), ChangeKind::Added);
        assert!(ops[1..].iter().all(|op| op.kind() == ChangeKind::Unchanged));
    }
}
