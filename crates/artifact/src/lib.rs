//! # Pre-warmed word artifacts
//!
//! Each displayed word resolves to an **artifact**: stylized text, or a
//! cached image reference for the handful of words that have one. All
//! image-existence probing happens up front, before playback is enabled —
//! the playback-time lookup is a synchronous cache read and never touches
//! the network.
//!
//! ## Default-deny
//!
//! Only a fixed candidate vocabulary is ever probed. After the candidates
//! settle, every other transcript word is explicitly marked as having no
//! artifact, so an unknown word can never trigger a lookup mid-playback.
//! A *missing* cache entry therefore means "pre-warm incomplete", not
//! "image absent" — the resolver treats it as a text fallback and logs it.

mod cache;
#[cfg(feature = "http")]
mod http;
mod normalize;
mod prewarm;
mod probe;
mod resolve;

pub use cache::{ArtifactCache, ArtifactRef, CacheEntry};
#[cfg(feature = "http")]
pub use http::HttpProbe;
pub use normalize::normalize;
pub use prewarm::{IMAGE_FORMATS, KNOWN_CANDIDATES, PROBE_TIMEOUT, PrewarmBuilder};
pub use probe::{ArtifactProbe, BoxFuture, ProbeError, ProbeOutcome, StaticProbe, StaticResponse};
pub use resolve::{Artifact, CELEBRATION_TRIGGER, is_celebration_trigger, resolve};
