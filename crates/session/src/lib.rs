//! # Word-synchronized display session
//!
//! Drives a one-word-at-a-time presentation from a host playback clock.
//! The host feeds [`ClockEvent`]s (periodic position ticks and transport
//! edges); the session locates the active word interval, resolves its
//! artifact through the pre-warmed cache, and emits [`RenderInstruction`]s
//! to the presentation layer behind [`PresentationRuntime`].
//!
//! ## Lifecycle
//!
//! A session is only constructible through [`Session::prepare`], a barrier
//! over three async tasks — timing loaded, artifact cache pre-warmed, media
//! loadable — that completes exactly once. This guarantees the tick path
//! never blocks on I/O: every artifact lookup during playback is a
//! synchronous cache read.
//!
//! ## Display states
//!
//! `EMPTY → SHOWING → EMPTY` via a debounced clear (short gaps between
//! words don't flicker), plus a one-way terminal transition to `ENDED` on
//! the track's end signal. One track per session; a finished session stays
//! finished.

mod clock;
mod config;
mod error;
mod prepare;
mod render;
mod rotation;
mod session;
mod state;

pub use clock::ClockEvent;
pub use config::{RenderBudget, SessionConfig};
pub use error::{Error, MediaError};
pub use prepare::{MediaSource, StaticMedia, StaticTiming, TimingLoader};
pub use render::{ArtifactKind, CelebrationEvent, PresentationRuntime, RenderInstruction};
pub use rotation::{FixedRotation, RandomRotation, RotationSource};
pub use session::Session;
pub use state::{DisplayState, PendingClear};
