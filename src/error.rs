use crate::types::Prayer;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown IANA timezone '{0}'")]
    UnknownTimezone(String),

    #[error("sun never reaches the {prayer} angle at latitude {latitude:.4} on {date}")]
    SunNeverCrosses {
        prayer: Prayer,
        latitude: f64,
        date: chrono::NaiveDate,
    },

    #[error("no calendar day after {0}")]
    DateOutOfRange(chrono::NaiveDate),

    #[error("invalid mushaf index: {0}")]
    InvalidMushaf(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
