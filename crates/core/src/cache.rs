//! Single-entry memoization of diff results
//!
//! The diff is recomputed fully on every call, which is wasteful for
//! callers that diff on every keystroke. This cache keeps the last
//! computation keyed by equality on the `(original, modified, options)`
//! triple; any change to the triple invalidates it. One entry only.

use tracing::debug;

use crate::diff::DiffResult;
use crate::engine::DiffEngine;
use crate::options::DiffOptions;

/// Caches the most recent diff computation.
#[derive(Debug, Default)]
pub struct DiffCache {
    entry: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    original: String,
    modified: String,
    options: DiffOptions,
    result: DiffResult,
}

impl DiffCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the result for this exact triple, computing and storing
    /// it first if the triple changed since the last call.
    pub fn diff(&mut self, original: &str, modified: &str, options: DiffOptions) -> &DiffResult {
        let fresh = self.entry.as_ref().is_some_and(|entry| {
            entry.options == options && entry.original == original && entry.modified == modified
        });

        if !fresh {
            debug!("diff cache miss, recomputing");
            self.entry = None;
        }

        let entry = self.entry.get_or_insert_with(|| CacheEntry {
            original: original.to_owned(),
            modified: modified.to_owned(),
            options,
            result: DiffEngine::new(options).diff(original, modified),
        });

        &entry.result
    }

    /// Drop the cached entry.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}
