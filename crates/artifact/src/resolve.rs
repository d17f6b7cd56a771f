use crate::cache::{ArtifactCache, ArtifactRef, CacheEntry};
use crate::normalize::normalize;

/// Words containing this substring (case-insensitive, checked before
/// normalization) fire the one-shot celebratory signal.
pub const CELEBRATION_TRIGGER: &str = "website";

/// The renderable unit selected for a word.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    Text { word: String },
    Image { word: String, artifact: ArtifactRef },
}

/// Map a word to its artifact via the pre-warmed cache.
///
/// Text is always the safe fallback: both an explicit `Absent` entry and a
/// cache miss yield text. A miss is logged — pre-warming is a precondition
/// for playback, so one indicates the cache was built from a different
/// transcript than the one playing.
pub fn resolve(cache: &ArtifactCache, word: &str) -> Artifact {
    let key = normalize(word);

    match cache.entry(&key) {
        Some(CacheEntry::Image(artifact)) => Artifact::Image {
            word: word.to_string(),
            artifact: artifact.clone(),
        },
        Some(CacheEntry::Absent) => Artifact::Text {
            word: word.to_string(),
        },
        None => {
            tracing::warn!(word = %key, "word missing from pre-warmed cache, showing text");
            Artifact::Text {
                word: word.to_string(),
            }
        }
    }
}

/// Whether the (pre-normalization) word should fire the celebratory signal.
/// Independent of the artifact kind the word resolves to.
pub fn is_celebration_trigger(word: &str, trigger: &str) -> bool {
    word.to_lowercase().contains(&trigger.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prewarm::PrewarmBuilder;
    use crate::probe::StaticProbe;

    async fn cache_with(existing: &[&str], transcript: &[&str]) -> ArtifactCache {
        let probe = StaticProbe::with_existing(existing.iter().map(|p| p.to_string()));
        PrewarmBuilder::new()
            .build(&probe, transcript.iter().copied())
            .await
    }

    #[tokio::test]
    async fn cached_image_resolves_to_image_artifact() {
        let cache = cache_with(&["joel.png"], &["Joel"]).await;

        match resolve(&cache, "Joel") {
            Artifact::Image { word, artifact } => {
                assert_eq!(word, "Joel");
                assert_eq!(artifact.path, "joel.png");
            }
            other => panic!("expected image artifact, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn absent_entry_resolves_to_text() {
        let cache = cache_with(&[], &["website"]).await;
        assert_eq!(
            resolve(&cache, "website"),
            Artifact::Text {
                word: "website".into()
            }
        );
    }

    #[tokio::test]
    async fn cache_miss_falls_back_to_text() {
        let cache = cache_with(&[], &[]).await;
        assert_eq!(
            resolve(&cache, "unseen"),
            Artifact::Text {
                word: "unseen".into()
            }
        );
    }

    #[tokio::test]
    async fn trailing_punctuation_still_hits_the_cache() {
        let cache = cache_with(&["joel.png"], &[]).await;
        assert!(matches!(
            resolve(&cache, "Joel!"),
            Artifact::Image { .. }
        ));
    }

    #[tokio::test]
    async fn resolve_is_idempotent() {
        let cache = cache_with(&["joel.png"], &["Hey"]).await;
        let first = resolve(&cache, "Joel");
        for _ in 0..3 {
            assert_eq!(resolve(&cache, "Joel"), first);
        }
    }

    #[test]
    fn trigger_is_case_insensitive_substring() {
        assert!(is_celebration_trigger("website", CELEBRATION_TRIGGER));
        assert!(is_celebration_trigger("Website!", CELEBRATION_TRIGGER));
        assert!(is_celebration_trigger("my-WEBSITE.", CELEBRATION_TRIGGER));
        assert!(!is_celebration_trigger("web site", CELEBRATION_TRIGGER));
    }
}
