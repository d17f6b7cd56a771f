use std::time::Duration;

use futures_util::future::join_all;

use crate::cache::{ArtifactCache, ArtifactRef, CacheEntry};
use crate::normalize::normalize;
use crate::probe::{ArtifactProbe, ProbeOutcome};

/// Format extensions tried per candidate, in order. First hit wins.
pub const IMAGE_FORMATS: [&str; 3] = ["png", "jpg", "svg"];

/// Per-probe timeout. A probe that does not settle within this window is
/// treated as exists-but-not-yet-materialized, not as absent.
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// The fixed candidate vocabulary. Artifact lookups are deliberately limited
/// to a known, finite set so the number of existence probes stays bounded.
pub const KNOWN_CANDIDATES: [&str; 8] = [
    "joel",
    "david",
    "google",
    "netflix",
    "bbc",
    "intel",
    "claude",
    "anthropic",
];

/// Builds the [`ArtifactCache`] ahead of playback.
///
/// Candidates fan out concurrently; an individual probe failure or timeout
/// never aborts the build. `build` completes once every candidate has
/// settled and every transcript word has an entry — it cannot fail.
pub struct PrewarmBuilder {
    candidates: Vec<String>,
    formats: Vec<String>,
    probe_timeout: Duration,
}

impl PrewarmBuilder {
    pub fn new() -> Self {
        Self::with_candidates(KNOWN_CANDIDATES.iter().map(|w| w.to_string()))
    }

    pub fn with_candidates(candidates: impl IntoIterator<Item = String>) -> Self {
        Self {
            candidates: candidates.into_iter().map(|w| normalize(&w)).collect(),
            formats: IMAGE_FORMATS.iter().map(|f| f.to_string()).collect(),
            probe_timeout: PROBE_TIMEOUT,
        }
    }

    /// Override the format extensions tried per candidate. Order matters;
    /// the first that resolves wins.
    pub fn formats(mut self, formats: impl IntoIterator<Item = String>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Probe the candidate vocabulary and build the full cache for the
    /// given transcript words.
    pub async fn build<'a>(
        &self,
        probe: &dyn ArtifactProbe,
        transcript_words: impl IntoIterator<Item = &'a str>,
    ) -> ArtifactCache {
        let mut cache = self.probe_candidates(probe).await;
        cache.mark_missing(transcript_words);
        tracing::info!(entries = cache.len(), "artifact pre-warm complete");
        cache
    }

    /// Resolve the candidate set only. The cache is not complete until
    /// [`ArtifactCache::mark_missing`] has been applied with the transcript;
    /// [`PrewarmBuilder::build`] does both.
    pub async fn probe_candidates(&self, probe: &dyn ArtifactProbe) -> ArtifactCache {
        let entries = join_all(
            self.candidates
                .iter()
                .map(|word| resolve_candidate(probe, word, &self.formats, self.probe_timeout)),
        )
        .await;

        let mut cache = ArtifactCache::default();
        for (word, entry) in self.candidates.iter().zip(entries) {
            cache.insert(word.clone(), entry);
        }
        cache
    }
}

impl Default for PrewarmBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Try each format in order; the first that exists (or times out) wins.
/// Hard not-found and probe failures fall through to the next format.
async fn resolve_candidate(
    probe: &dyn ArtifactProbe,
    word: &str,
    formats: &[String],
    per_probe: Duration,
) -> CacheEntry {
    for format in formats {
        let path = format!("{word}.{format}");

        match tokio::time::timeout(per_probe, probe.probe(&path)).await {
            Ok(Ok(ProbeOutcome::Exists)) => {
                tracing::debug!(%path, "artifact found");
                return CacheEntry::Image(ArtifactRef { path });
            }
            Ok(Ok(ProbeOutcome::NotFound)) => continue,
            Ok(Err(error)) => {
                tracing::warn!(%path, error = %error, "artifact probe failed");
                continue;
            }
            Err(_) => {
                tracing::debug!(%path, "artifact probe timed out, assuming present");
                return CacheEntry::Image(ArtifactRef { path });
            }
        }
    }

    CacheEntry::Absent
}
