/// Edge-triggered notifications from the host playback clock.
///
/// The host media element is opaque to the core: a source of position ticks
/// (monotonically increasing while playing, seconds) and transport edges.
/// Tick cadence is coarse and jittery; the interval tolerance policy
/// absorbs that.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ClockEvent {
    Play,
    Pause,
    /// Current playback position, in seconds.
    Tick(f64),
    /// End of track. One-way: the session never leaves the terminal state.
    Ended,
}
