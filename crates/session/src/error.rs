pub type MediaError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Session-fatal failures, surfaced to the user. Individual probe failures
/// and stale clear deadlines are absorbed where they occur and never reach
/// this type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("timing data unavailable: {0}")]
    Timing(#[from] cue_timeline::Error),

    #[error("media failed to load: {0}")]
    Media(MediaError),
}
