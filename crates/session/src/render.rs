/// Classification of what is currently shown, used by the debounce policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ArtifactKind {
    Text,
    Image,
    End,
}

/// One instruction to the presentation layer.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum RenderInstruction {
    ShowText {
        word: String,
        /// Suggested visual variance; small, in degrees.
        rotation_deg: f32,
    },
    ShowImage {
        path: String,
        max_width: f64,
        max_height: f64,
    },
    /// The fixed terminal artifact, shown once the track ends.
    ShowEnd,
    Clear,
}

/// Fire-and-forget celebratory signal. At most one live instance from the
/// core's perspective; de-duplication of rapid re-triggers is a
/// presentation-layer concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CelebrationEvent;

/// What the session emits to its host. All calls happen on the host's event
/// loop, inside a clock callback — implementations must not re-enter the
/// session.
pub trait PresentationRuntime: Send + Sync {
    fn render(&self, instruction: RenderInstruction);
    fn celebrate(&self, event: CelebrationEvent);
}
