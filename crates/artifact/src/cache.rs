use std::collections::HashMap;

use crate::normalize::normalize;

/// Locator of a resolved image artifact, e.g. `joel.png`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ArtifactRef {
    pub path: String,
}

/// What pre-warming concluded for one normalized word.
///
/// `Absent` is an explicit marker, distinct from a missing entry: after the
/// build completes, every transcript word has an entry, so a miss at
/// playback time means the cache was consulted before pre-warming finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEntry {
    Image(ArtifactRef),
    Absent,
}

/// Word-to-artifact mapping, keyed by normalized word. Built once per loaded
/// interval set; read-only during playback.
#[derive(Debug, Default)]
pub struct ArtifactCache {
    entries: HashMap<String, CacheEntry>,
}

impl ArtifactCache {
    pub fn entry(&self, normalized: &str) -> Option<&CacheEntry> {
        self.entries.get(normalized)
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.entries.contains_key(normalized)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, normalized: String, entry: CacheEntry) {
        self.entries.insert(normalized, entry);
    }

    /// Mark every given word that has no entry yet as having no artifact.
    ///
    /// Words outside the probed candidate set must never trigger an image
    /// lookup mid-playback, so the builder calls this with the full
    /// transcript once the candidates have settled.
    pub fn mark_missing<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            let key = normalize(word);
            self.entries.entry(key).or_insert(CacheEntry::Absent);
        }
    }
}
