use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

pub type ProbeError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// What one existence probe learned about a candidate path.
///
/// A probe that exceeds the builder's per-probe timeout never produces an
/// outcome at all; the builder maps that case to "exists but not yet
/// materialized", which is distinct from a hard [`ProbeOutcome::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Exists,
    NotFound,
}

/// Asynchronous artifact-existence probe, used only during pre-warming.
///
/// Object-safe via the explicit `BoxFuture` return type; the pre-warm
/// builder takes `&dyn ArtifactProbe`.
pub trait ArtifactProbe: Send + Sync {
    fn probe<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<ProbeOutcome, ProbeError>>;
}

/// Scripted behaviour for one path of a [`StaticProbe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticResponse {
    Exists,
    NotFound,
    /// Resolve with a probe error.
    Fail,
    /// Never resolve — exercises the builder's per-probe timeout.
    Stall,
}

/// In-memory probe for tests and offline replay.
///
/// Paths without a scripted response answer [`ProbeOutcome::NotFound`].
#[derive(Debug, Default)]
pub struct StaticProbe {
    responses: HashMap<String, StaticResponse>,
}

impl StaticProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe that answers `Exists` for exactly the given paths.
    pub fn with_existing<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut probe = Self::new();
        for path in paths {
            probe.respond(path, StaticResponse::Exists);
        }
        probe
    }

    pub fn respond(&mut self, path: impl Into<String>, response: StaticResponse) -> &mut Self {
        self.responses.insert(path.into(), response);
        self
    }
}

impl ArtifactProbe for StaticProbe {
    fn probe<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<ProbeOutcome, ProbeError>> {
        let response = self
            .responses
            .get(path)
            .copied()
            .unwrap_or(StaticResponse::NotFound);

        Box::pin(async move {
            match response {
                StaticResponse::Exists => Ok(ProbeOutcome::Exists),
                StaticResponse::NotFound => Ok(ProbeOutcome::NotFound),
                StaticResponse::Fail => Err(format!("scripted probe failure for {path}").into()),
                StaticResponse::Stall => std::future::pending().await,
            }
        })
    }
}
