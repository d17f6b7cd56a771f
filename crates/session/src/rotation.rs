/// Source of the small rotation suggested for text artifacts.
///
/// Injectable so tests and replays stay deterministic.
pub trait RotationSource: Send {
    /// Next rotation suggestion, in degrees.
    fn next_rotation(&mut self) -> f32;
}

/// Uniform jitter in ±3°.
pub struct RandomRotation;

impl RotationSource for RandomRotation {
    fn next_rotation(&mut self) -> f32 {
        rand::random_range(-3.0..=3.0)
    }
}

/// Fixed rotation for tests and golden replays.
pub struct FixedRotation(pub f32);

impl RotationSource for FixedRotation {
    fn next_rotation(&mut self) -> f32 {
        self.0
    }
}
