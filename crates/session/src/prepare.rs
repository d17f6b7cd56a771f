use cue_artifact::BoxFuture;
use cue_timeline::WordInterval;

use crate::error::MediaError;

/// Async source of the timing records. Loaded exactly once, before
/// playback; failures are session-fatal.
pub trait TimingLoader: Send + Sync {
    fn load(&self) -> BoxFuture<'_, Result<Vec<WordInterval>, cue_timeline::Error>>;
}

/// In-memory timing loader over a JSON string, for tests and offline
/// replay.
pub struct StaticTiming {
    json: String,
}

impl StaticTiming {
    pub fn from_json(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl TimingLoader for StaticTiming {
    fn load(&self) -> BoxFuture<'_, Result<Vec<WordInterval>, cue_timeline::Error>> {
        Box::pin(async move { cue_timeline::source::from_json_str(&self.json) })
    }
}

/// The audio resource behind the host clock. The core only needs to know
/// it is loadable before enabling playback; failures are session-fatal.
pub trait MediaSource: Send + Sync {
    fn load(&self) -> BoxFuture<'_, Result<(), MediaError>>;
}

/// Media double that is immediately ready (or scripted to fail).
pub struct StaticMedia {
    error: Option<String>,
}

impl StaticMedia {
    pub fn ready() -> Self {
        Self { error: None }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

impl MediaSource for StaticMedia {
    fn load(&self) -> BoxFuture<'_, Result<(), MediaError>> {
        Box::pin(async move {
            match &self.error {
                None => Ok(()),
                Some(message) => Err(message.clone().into()),
            }
        })
    }
}
