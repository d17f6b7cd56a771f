use std::sync::Arc;
use std::time::Duration;

use cue_artifact::{Artifact, ArtifactCache, ArtifactProbe, PrewarmBuilder};
use cue_timeline::IntervalIndex;

use crate::clock::ClockEvent;
use crate::config::SessionConfig;
use crate::error::Error;
use crate::prepare::{MediaSource, TimingLoader};
use crate::render::{ArtifactKind, CelebrationEvent, PresentationRuntime, RenderInstruction};
use crate::rotation::{RandomRotation, RotationSource};
use crate::state::{DisplayState, PendingClear};

/// One synchronization session: one track, one interval list, one cache.
///
/// Single-threaded and cooperative: all mutation happens inside
/// [`Session::handle`], driven by the host clock. The cache is read-only
/// after [`Session::prepare`], so no locking is needed anywhere.
pub struct Session {
    index: IntervalIndex,
    cache: ArtifactCache,
    config: SessionConfig,
    runtime: Arc<dyn PresentationRuntime>,
    rotation: Box<dyn RotationSource>,
    state: DisplayState,
    playing: bool,
}

impl Session {
    /// Readiness barrier: loads timing, pre-warms the artifact cache, and
    /// checks the media resource, concurrently. Completes exactly once;
    /// playback must not be enabled until it returns `Ok`.
    ///
    /// Timing and media failures are fatal. Probe failures are absorbed into
    /// the cache during pre-warming and never fail the barrier.
    pub async fn prepare(
        config: SessionConfig,
        timing: &dyn TimingLoader,
        media: &dyn MediaSource,
        probe: &dyn ArtifactProbe,
        runtime: Arc<dyn PresentationRuntime>,
    ) -> Result<Self, Error> {
        let builder = PrewarmBuilder::with_candidates(config.candidate_words.iter().cloned())
            .probe_timeout(Duration::from_millis(config.probe_timeout_ms));

        let (intervals, mut cache, ()) = tokio::try_join!(
            async { timing.load().await.map_err(Error::from) },
            async { Ok::<_, Error>(builder.probe_candidates(probe).await) },
            async { media.load().await.map_err(Error::Media) },
        )?;

        let index = IntervalIndex::new(intervals);
        cache.mark_missing(index.words());

        tracing::info!(
            words = index.len(),
            cache_entries = cache.len(),
            "session ready"
        );

        Ok(Self {
            index,
            cache,
            config,
            runtime,
            rotation: Box::new(RandomRotation),
            state: DisplayState::default(),
            playing: false,
        })
    }

    /// Replace the rotation source, e.g. with [`crate::FixedRotation`] for
    /// deterministic output.
    pub fn set_rotation_source(&mut self, rotation: Box<dyn RotationSource>) {
        self.rotation = rotation;
    }

    pub fn display(&self) -> &DisplayState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn index(&self) -> &IntervalIndex {
        &self.index
    }

    /// Feed one clock notification.
    pub fn handle(&mut self, event: ClockEvent) {
        match event {
            ClockEvent::Play => self.playing = true,
            ClockEvent::Pause => self.playing = false,
            ClockEvent::Tick(t) => self.tick(t),
            ClockEvent::Ended => self.end(),
        }
    }

    /// One playback-position tick. Synchronous, no I/O.
    pub fn tick(&mut self, t: f64) {
        if self.state.is_ended() {
            return;
        }

        let located = self
            .index
            .locate(t)
            .map(|hit| (hit.index, hit.interval.word.clone()));

        match located {
            Some((index, word)) => self.activate(index, word),
            None => self.on_silence(t),
        }
    }

    fn activate(&mut self, index: usize, word: String) {
        // Any active interval cancels a pending clear, including
        // re-delivery of the one already showing.
        self.state.pending_clear = None;

        if self.state.active == Some(index) {
            return;
        }

        let previous = self.state.active;
        self.state.active = Some(index);

        let instruction = match cue_artifact::resolve(&self.cache, &word) {
            Artifact::Image { artifact, .. } => {
                self.state.shown = Some(ArtifactKind::Image);
                RenderInstruction::ShowImage {
                    path: artifact.path,
                    max_width: self.config.render_budget.max_width,
                    max_height: self.config.render_budget.max_height,
                }
            }
            Artifact::Text { word } => {
                self.state.shown = Some(ArtifactKind::Text);
                RenderInstruction::ShowText {
                    rotation_deg: self.rotation.next_rotation(),
                    word,
                }
            }
        };

        tracing::debug!(from = ?previous, to = index, word = %word, "interval transition");
        self.runtime.render(instruction);

        if cue_artifact::is_celebration_trigger(&word, &self.config.celebration_trigger) {
            tracing::debug!(word = %word, "celebration triggered");
            self.runtime.celebrate(CelebrationEvent);
        }
    }

    fn on_silence(&mut self, t: f64) {
        let Some(kind) = self.state.shown else {
            return;
        };

        match self.state.pending_clear {
            None => {
                let deadline = t + self.config.clear_delay_secs(kind);
                self.state.pending_clear = Some(PendingClear { deadline });
                tracing::debug!(?kind, deadline, "debounced clear scheduled");
            }
            // Reaching the deadline on a silent tick is the re-validation:
            // had a word become active meanwhile, `activate` would have
            // dropped the pending clear.
            Some(PendingClear { deadline }) if t >= deadline => {
                tracing::debug!("debounced clear fired");
                self.state = DisplayState::default();
                self.runtime.render(RenderInstruction::Clear);
            }
            Some(_) => {}
        }
    }

    fn end(&mut self) {
        if self.state.is_ended() {
            return;
        }

        tracing::info!("track ended");
        self.playing = false;
        self.state = DisplayState {
            active: None,
            shown: Some(ArtifactKind::End),
            pending_clear: None,
        };
        self.runtime.render(RenderInstruction::ShowEnd);
    }
}
