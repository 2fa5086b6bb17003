//! Derived-metadata tracking for development builds.
//!
//! The component cache keys on rendered output, but title, frontmatter and
//! the heading outline are consumed by things that never see that output
//! (navigation, sidebars). A metadata-only edit would be invisible to the
//! component cache, so the tracker keeps the last observed snapshot per file
//! and the transformer diffs against it to decide whether watchers must be
//! told to reload the file.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use lru::LruCache;

use mdstage_meta::{FrontmatterData, HeaderEntry};

use crate::cache::DEFAULT_CAPACITY;

/// Last-observed derived metadata for one file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetadataSnapshot {
    /// Inferred document title.
    pub inferred_title: Option<String>,
    /// Frontmatter data, body content excluded.
    pub frontmatter: FrontmatterData,
    /// Heading outline in document order.
    pub headers: Vec<HeaderEntry>,
}

impl MetadataSnapshot {
    /// Whether this snapshot differs from a previously stored one.
    ///
    /// Title comparison is exact string equality, frontmatter comparison is
    /// structural, and header comparison is position-sensitive — reordering
    /// headings counts as a change even when the set is identical.
    #[must_use]
    pub fn differs_from(&self, old: &MetadataSnapshot) -> bool {
        self.inferred_title != old.inferred_title
            || self.frontmatter != old.frontmatter
            || headers_changed(&old.headers, &self.headers)
    }
}

fn headers_changed(old: &[HeaderEntry], new: &[HeaderEntry]) -> bool {
    if old.len() != new.len() {
        return true;
    }
    old.iter()
        .zip(new)
        .any(|(a, b)| a.title != b.title || a.level != b.level)
}

/// Bounded LRU map from file identity to its last [`MetadataSnapshot`].
///
/// Independent pool from the component cache, same capacity and eviction
/// policy. Writes always overwrite the previous snapshot for a file.
#[derive(Debug)]
pub struct MetadataTracker {
    entries: LruCache<PathBuf, MetadataSnapshot>,
}

impl MetadataTracker {
    /// Create a tracker with the default capacity of 1000 entries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a tracker with a custom capacity.
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Last snapshot observed for a file, promoting it to most-recently-used.
    pub fn get(&mut self, file: &Path) -> Option<&MetadataSnapshot> {
        self.entries.get(file)
    }

    /// Store the latest snapshot for a file, replacing any previous one.
    pub fn put(&mut self, file: PathBuf, snapshot: MetadataSnapshot) {
        self.entries.put(file, snapshot);
    }

    /// Number of tracked files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tracker is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MetadataTracker {
    fn default() -> Self {
        Self::new()
    }
}
