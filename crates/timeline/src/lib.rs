//! Word timing data and the time-to-interval lookup.
//!
//! A track's transcript arrives once, before playback, as an ordered list of
//! `{word, start, end}` records in fractional seconds. [`IntervalIndex`]
//! answers "which word is active at time `t`" under a tolerance policy that
//! absorbs coarse clock ticks and imprecise STT boundaries. The list is
//! read-only after load; lookups never mutate.

mod error;
mod index;
pub mod source;
mod types;

pub use error::Error;
pub use index::{
    DEFAULT_TOLERANCE_SECS, IntervalIndex, IntervalRef, SHORT_INTERVAL_SECS,
    SHORT_INTERVAL_TOLERANCE_SECS,
};
pub use types::WordInterval;
