/// One word of the loaded track with its timing window, in seconds.
///
/// Immutable once loaded. `start` is non-decreasing across the loaded
/// sequence, but adjacent intervals may overlap once tolerance padding is
/// applied — lookup must not assume strict non-overlap.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WordInterval {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

impl WordInterval {
    pub fn new(word: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            word: word.into(),
            start,
            end,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
