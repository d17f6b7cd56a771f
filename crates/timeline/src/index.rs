use crate::types::WordInterval;

/// Intervals shorter than this get the wider tolerance window.
pub const SHORT_INTERVAL_SECS: f64 = 0.2;

/// Boundary padding for intervals shorter than [`SHORT_INTERVAL_SECS`].
///
/// STT boundaries for very short words are the least precise, so they get
/// the most forgiving window.
pub const SHORT_INTERVAL_TOLERANCE_SECS: f64 = 0.25;

/// Boundary padding for all other intervals.
pub const DEFAULT_TOLERANCE_SECS: f64 = 0.15;

/// A matched interval: its position in the loaded sequence plus the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalRef<'a> {
    pub index: usize,
    pub interval: &'a WordInterval,
}

/// Ordered, read-only index over the loaded word intervals.
///
/// [`IntervalIndex::locate`] scans in list order and the **first** tolerant
/// window containing `t` wins. Tolerance padding can make adjacent windows
/// overlap; the list-order tie-break is deliberate and keeps any given tick
/// resolving to the earlier word.
#[derive(Debug, Clone, Default)]
pub struct IntervalIndex {
    intervals: Vec<WordInterval>,
}

impl IntervalIndex {
    /// Assumes `start` is non-decreasing across `intervals`. Overlap between
    /// tolerant windows is allowed.
    pub fn new(intervals: Vec<WordInterval>) -> Self {
        Self { intervals }
    }

    /// Which interval, if any, contains `t` under the tolerance policy.
    ///
    /// An interval `[start, end]` matches when
    /// `start - τ <= t <= end + τ`, with `τ` chosen per interval by
    /// duration. Returns `None` before all intervals, in gaps, and after all
    /// intervals — the terminal transition is driven by the track's "ended"
    /// signal, never by this lookup.
    pub fn locate(&self, t: f64) -> Option<IntervalRef<'_>> {
        self.intervals
            .iter()
            .enumerate()
            .find(|(_, interval)| {
                let tolerance = tolerance_for(interval);
                t >= interval.start - tolerance && t <= interval.end + tolerance
            })
            .map(|(index, interval)| IntervalRef { index, interval })
    }

    pub fn get(&self, index: usize) -> Option<&WordInterval> {
        self.intervals.get(index)
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn intervals(&self) -> &[WordInterval] {
        &self.intervals
    }

    /// The words of the loaded transcript, in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.intervals.iter().map(|i| i.word.as_str())
    }
}

fn tolerance_for(interval: &WordInterval) -> f64 {
    if interval.duration() < SHORT_INTERVAL_SECS {
        SHORT_INTERVAL_TOLERANCE_SECS
    } else {
        DEFAULT_TOLERANCE_SECS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn interval(word: &str, start: f64, end: f64) -> WordInterval {
        WordInterval::new(word, start, end)
    }

    fn index(intervals: &[(&str, f64, f64)]) -> IntervalIndex {
        IntervalIndex::new(
            intervals
                .iter()
                .map(|&(w, s, e)| interval(w, s, e))
                .collect(),
        )
    }

    fn word_at(idx: &IntervalIndex, t: f64) -> Option<String> {
        idx.locate(t).map(|r| r.interval.word.clone())
    }

    #[test]
    fn exact_window_matches() {
        let idx = index(&[("hey", 1.0, 1.5)]);
        assert_eq!(word_at(&idx, 1.0), Some("hey".into()));
        assert_eq!(word_at(&idx, 1.25), Some("hey".into()));
        assert_eq!(word_at(&idx, 1.5), Some("hey".into()));
    }

    #[test]
    fn long_interval_tolerance_boundaries() {
        // Duration 0.5s >= threshold, so τ = 0.15.
        let idx = index(&[("word", 1.0, 1.5)]);
        assert!(idx.locate(1.0 - DEFAULT_TOLERANCE_SECS).is_some());
        assert!(
            idx.locate(1.0 - DEFAULT_TOLERANCE_SECS - EPSILON)
                .is_none()
        );
        assert!(idx.locate(1.5 + DEFAULT_TOLERANCE_SECS).is_some());
        assert!(
            idx.locate(1.5 + DEFAULT_TOLERANCE_SECS + EPSILON)
                .is_none()
        );
    }

    #[test]
    fn short_interval_tolerance_boundaries() {
        // Duration 0.1s < threshold, so τ = 0.25.
        let idx = index(&[("hi", 1.0, 1.1)]);
        assert!(idx.locate(1.0 - SHORT_INTERVAL_TOLERANCE_SECS).is_some());
        assert!(
            idx.locate(1.0 - SHORT_INTERVAL_TOLERANCE_SECS - EPSILON)
                .is_none()
        );
        assert!(idx.locate(1.1 + SHORT_INTERVAL_TOLERANCE_SECS).is_some());
        assert!(
            idx.locate(1.1 + SHORT_INTERVAL_TOLERANCE_SECS + EPSILON)
                .is_none()
        );
    }

    #[test]
    fn shorter_interval_gets_strictly_wider_window() {
        // Same start; one below the threshold, one at it.
        let short = index(&[("a", 1.0, 1.19)]);
        let long = index(&[("a", 1.0, 1.2)]);

        // A tick that falls inside the short word's widened window but
        // outside the long word's default window.
        let t = 1.0 - 0.2;
        assert!(short.locate(t).is_some());
        assert!(long.locate(t).is_none());
    }

    #[test]
    fn duration_exactly_at_threshold_uses_default_tolerance() {
        let idx = index(&[("a", 0.0, SHORT_INTERVAL_SECS)]);
        assert!(
            idx.locate(SHORT_INTERVAL_SECS + DEFAULT_TOLERANCE_SECS + EPSILON)
                .is_none()
        );
    }

    #[test]
    fn first_interval_wins_on_overlapping_windows() {
        // Tolerance makes the windows overlap around t ≈ 1.5; the earlier
        // interval must take the tick.
        let idx = index(&[("first", 1.0, 1.5), ("second", 1.55, 2.0)]);
        let hit = idx.locate(1.5).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.interval.word, "first");
    }

    #[test]
    fn gap_between_intervals_is_none() {
        let idx = index(&[("a", 0.0, 0.5), ("b", 2.0, 2.4)]);
        assert_eq!(idx.locate(1.2), None);
    }

    #[test]
    fn before_and_after_all_intervals_is_none() {
        let idx = index(&[("a", 1.0, 1.5)]);
        assert_eq!(idx.locate(0.0), None);
        assert_eq!(idx.locate(10.0), None);
    }

    #[test]
    fn empty_index_locates_nothing() {
        let idx = IntervalIndex::default();
        assert_eq!(idx.locate(0.0), None);
    }

    #[test]
    fn locate_is_idempotent() {
        let idx = index(&[("a", 0.0, 0.5), ("b", 2.0, 2.4)]);
        let first = idx.locate(0.2).map(|r| r.index);
        for _ in 0..3 {
            assert_eq!(idx.locate(0.2).map(|r| r.index), first);
        }
    }
}
