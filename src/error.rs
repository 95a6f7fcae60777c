use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LanepackError {
    #[error("Invalid estimated time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Invalid selection window: start {start} is not before end {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

pub type Result<T> = std::result::Result<T, LanepackError>;
