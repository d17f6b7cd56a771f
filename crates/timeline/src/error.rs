#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("timing data unavailable: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("timing data unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("timing data is empty")]
    Empty,

    #[error("invalid interval {index} ({word:?}): start={start} end={end}")]
    InvalidInterval {
        index: usize,
        word: String,
        start: f64,
        end: f64,
    },
}
