//! Loading and validating the timing JSON.
//!
//! The timing source is an ordered JSON array of `{word, start, end}`
//! records, seconds as floats. Any failure here is fatal to the session
//! (there is no retry); the caller surfaces it to the user.

use crate::error::Error;
use crate::types::WordInterval;

/// Parse timing records from a JSON string.
pub fn from_json_str(json: &str) -> Result<Vec<WordInterval>, Error> {
    let intervals: Vec<WordInterval> = serde_json::from_str(json)?;
    validate(intervals)
}

/// Parse timing records from a reader.
pub fn from_reader(reader: impl std::io::Read) -> Result<Vec<WordInterval>, Error> {
    let intervals: Vec<WordInterval> = serde_json::from_reader(reader)?;
    validate(intervals)
}

fn validate(intervals: Vec<WordInterval>) -> Result<Vec<WordInterval>, Error> {
    if intervals.is_empty() {
        return Err(Error::Empty);
    }

    for (index, interval) in intervals.iter().enumerate() {
        if interval.start < 0.0 || interval.end < interval.start {
            return Err(Error::InvalidInterval {
                index,
                word: interval.word.clone(),
                start: interval.start,
                end: interval.end,
            });
        }
    }

    tracing::debug!(words = intervals.len(), "timing data loaded");
    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ordered_records() {
        let intervals = from_json_str(
            r#"[
                {"word": "Hey", "start": 0.0, "end": 0.5},
                {"word": "website", "start": 2.0, "end": 2.4}
            ]"#,
        )
        .unwrap();

        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].word, "Hey");
        assert_eq!(intervals[1].start, 2.0);
    }

    #[test]
    fn malformed_json_is_unavailable() {
        assert!(matches!(from_json_str("not json"), Err(Error::Parse(_))));
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(from_json_str("[]"), Err(Error::Empty)));
    }

    #[test]
    fn inverted_interval_is_rejected() {
        let result = from_json_str(r#"[{"word": "x", "start": 2.0, "end": 1.0}]"#);
        assert!(matches!(
            result,
            Err(Error::InvalidInterval { index: 0, .. })
        ));
    }

    #[test]
    fn negative_start_is_rejected() {
        let result = from_json_str(r#"[{"word": "x", "start": -0.5, "end": 1.0}]"#);
        assert!(matches!(result, Err(Error::InvalidInterval { .. })));
    }

    #[test]
    fn zero_duration_interval_is_allowed() {
        let intervals = from_json_str(r#"[{"word": "x", "start": 1.0, "end": 1.0}]"#).unwrap();
        assert_eq!(intervals[0].duration(), 0.0);
    }
}
