//! Diff result types and aggregation

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of change a line operation represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Line exists only in the modified document
    Added,
    /// Line exists only in the original document
    Removed,
    /// Line present in both documents (after normalization)
    Unchanged,
}

/// A single classified line in a diff result.
///
/// Line numbers are 1-based. `Unchanged` carries its position in both
/// documents; `Removed` carries only a source position and `Added`
/// only a target position.
///
/// Across one result, the source line numbers of `Unchanged` and
/// `Removed` operations appear in emission order as exactly `1..=m`,
/// and the target line numbers of `Unchanged` and `Added` as exactly
/// `1..=n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiffOperation {
    Unchanged {
        content: String,
        source_line: usize,
        target_line: usize,
    },
    Removed {
        content: String,
        source_line: usize,
    },
    Added {
        content: String,
        target_line: usize,
    },
}

impl DiffOperation {
    /// The kind of change, without its payload.
    pub fn kind(&self) -> ChangeKind {
        match self {
            Self::Unchanged { .. } => ChangeKind::Unchanged,
            Self::Removed { .. } => ChangeKind::Removed,
            Self::Added { .. } => ChangeKind::Added,
        }
    }

    /// The original, unnormalized line text.
    pub fn content(&self) -> &str {
        match self {
            Self::Unchanged { content, .. }
            | Self::Removed { content, .. }
            | Self::Added { content, .. } => content,
        }
    }

    /// 1-based line number in the original document, if this line
    /// exists there.
    pub fn source_line(&self) -> Option<usize> {
        match self {
            Self::Unchanged { source_line, .. } | Self::Removed { source_line, .. } => {
                Some(*source_line)
            }
            Self::Added { .. } => None,
        }
    }

    /// 1-based line number in the modified document, if this line
    /// exists there.
    pub fn target_line(&self) -> Option<usize> {
        match self {
            Self::Unchanged { target_line, .. } | Self::Added { target_line, .. } => {
                Some(*target_line)
            }
            Self::Removed { .. } => None,
        }
    }

    /// Marker used by unified rendering: `'+'`, `'-'`, or `' '`.
    pub fn marker(&self) -> char {
        match self.kind() {
            ChangeKind::Added => '+',
            ChangeKind::Removed => '-',
            ChangeKind::Unchanged => ' ',
        }
    }
}

/// The ordered operation sequence from one diff computation.
///
/// Immutable once produced and owned by the caller; a new input pair
/// or option change produces a wholly new result with no relation to
/// previous ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    operations: Vec<DiffOperation>,
}

impl DiffResult {
    pub(crate) fn new(operations: Vec<DiffOperation>) -> Self {
        Self { operations }
    }

    /// All operations in emission order.
    pub fn operations(&self) -> &[DiffOperation] {
        &self.operations
    }

    /// Number of operations (lines) in the result.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Iterate over operations in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, DiffOperation> {
        self.operations.iter()
    }

    /// True when every operation is `Unchanged`.
    pub fn is_identical(&self) -> bool {
        self.operations
            .iter()
            .all(|op| op.kind() == ChangeKind::Unchanged)
    }

    /// Count operations by kind in a single pass.
    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();

        for op in &self.operations {
            match op.kind() {
                ChangeKind::Added => summary.added += 1,
                ChangeKind::Removed => summary.removed += 1,
                ChangeKind::Unchanged => summary.unchanged += 1,
            }
        }

        summary
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a DiffOperation;
    type IntoIter = std::slice::Iter<'a, DiffOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

/// Aggregate counts over a diff result.
///
/// Derived deterministically from the operation sequence; never stored
/// independently of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} removed, {} unchanged",
            self.added, self.removed, self.unchanged
        )
    }
}
