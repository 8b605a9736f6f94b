//! Strict parsing of submission upload timestamps.

use chrono::{NaiveDateTime, SubsecRound};
use thiserror::Error;

/// Fixed timestamp format recorded in submission metadata,
/// `YYYY.MM.DD HH:MM:SS`. Values are naive local wall-clock time.
pub const UPLOAD_TIME_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Upload timestamp string does not match [`UPLOAD_TIME_FORMAT`].
#[derive(Debug, Error)]
#[error("upload time '{value}' does not match '{format}': {source}", format = UPLOAD_TIME_FORMAT)]
pub struct TimeParseError {
    value: String,
    #[source]
    source: chrono::ParseError,
}

/// Parse an upload timestamp into a calendar time.
///
/// Parsing is strict: trailing input and alternate formats are
/// rejected, and no timezone handling is applied.
pub fn parse_upload_time(value: &str) -> Result<NaiveDateTime, TimeParseError> {
    NaiveDateTime::parse_from_str(value, UPLOAD_TIME_FORMAT)
        .map_err(|source| TimeParseError { value: value.to_string(), source })
}

/// Collapse a parsed calendar time to its six leading components
/// (year through second), dropping any sub-second part.
pub fn to_datetime(parsed: NaiveDateTime) -> NaiveDateTime {
    parsed.trunc_subsecs(0)
}
