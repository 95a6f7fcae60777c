use std::sync::LazyLock;

use chrono::Duration;
use regex::Regex;

use crate::error::{LanepackError, Result};

static HOURS_ONLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
static HOURS_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}:[0-5][0-9]$").unwrap());
static HOURS_MINUTES_SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}:[0-5][0-9]:[0-5][0-9]$").unwrap());
static HOURS_MINUTES_SECONDS_MILLIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}:[0-5][0-9]:[0-5][0-9]:[0-9]{1,2}$").unwrap());

const NANOS_PER_HOUR: i64 = 3_600_000_000_000;
const NANOS_PER_MINUTE: i64 = 60_000_000_000;
const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MILLI: i64 = 1_000_000;

/// Rewrite a raw estimate into the canonical `H:MM:SS:fff` shape.
///
/// Accepted formats, tried in order: bare hours (`"8"`), `H:MM`, `H:MM:SS`
/// and the full four-field form. Minutes and seconds are limited to 00-59;
/// anything else fails with [`LanepackError::InvalidTimeFormat`].
pub fn canonicalize(raw: &str) -> Result<String> {
    if HOURS_ONLY.is_match(raw) {
        Ok(format!("{raw}:00:00:00"))
    } else if HOURS_MINUTES.is_match(raw) {
        Ok(format!("{raw}:00:00"))
    } else if HOURS_MINUTES_SECONDS.is_match(raw) {
        Ok(format!("{raw}:00"))
    } else if HOURS_MINUTES_SECONDS_MILLIS.is_match(raw) {
        Ok(raw.to_string())
    } else {
        Err(LanepackError::InvalidTimeFormat(raw.to_string()))
    }
}

/// Parse a raw estimate into an elapsed duration.
pub fn parse_estimate(raw: &str) -> Result<Duration> {
    let canonical = canonicalize(raw)?;
    to_duration(&canonical, raw)
}

/// Convert a canonical 4-field estimate to a duration, summing the fields
/// at nanosecond resolution. The fourth field is at most two digits but
/// counts as whole milliseconds.
pub(crate) fn to_duration(canonical: &str, raw: &str) -> Result<Duration> {
    let scales = [
        NANOS_PER_HOUR,
        NANOS_PER_MINUTE,
        NANOS_PER_SECOND,
        NANOS_PER_MILLI,
    ];

    let mut total: i64 = 0;
    for (field, scale) in canonical.split(':').zip(scales) {
        let value: i64 = field
            .parse()
            .map_err(|_| LanepackError::InvalidTimeFormat(raw.to_string()))?;
        total = value
            .checked_mul(scale)
            .and_then(|nanos| total.checked_add(nanos))
            .ok_or_else(|| LanepackError::InvalidTimeFormat(raw.to_string()))?;
    }

    Ok(Duration::nanoseconds(total))
}
