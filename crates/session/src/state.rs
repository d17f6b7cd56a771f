use crate::render::ArtifactKind;

/// The debounced-clear "timer": a media-time deadline, re-validated on the
/// tick that reaches it. At most one is outstanding at a time; scheduling a
/// new one replaces the old, and cancelling when none is pending is a no-op.
/// Because the deadline is media time, pausing the host clock freezes the
/// clear along with playback; it fires on the first tick at or past the
/// deadline once ticks resume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingClear {
    pub deadline: f64,
}

/// The currently rendered artifact. Owned exclusively by the session and
/// mutated only inside clock callbacks; never shared with a concurrent
/// writer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayState {
    pub(crate) active: Option<usize>,
    pub(crate) shown: Option<ArtifactKind>,
    pub(crate) pending_clear: Option<PendingClear>,
}

impl DisplayState {
    /// Index of the interval whose artifact is showing, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn shown(&self) -> Option<ArtifactKind> {
        self.shown
    }

    pub fn pending_clear(&self) -> Option<PendingClear> {
        self.pending_clear
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_none()
    }

    pub fn is_ended(&self) -> bool {
        self.shown == Some(ArtifactKind::End)
    }
}
