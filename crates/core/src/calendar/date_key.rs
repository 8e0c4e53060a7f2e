//! The single owner of the `yyyy-MM-dd` date key format.
//!
//! Both the binning write path and the grid lookup read path derive their
//! keys here, so the two sides cannot drift apart on formatting.

use chrono::NaiveDate;

use super::error::EventError;

/// strftime spelling of the date key format.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Parses a raw event date into its calendar day.
///
/// A time suffix (`2024-06-05T14:00:00` or `2024-06-05 14:00`) is truncated
/// before parsing; the bare string is used as-is otherwise.
pub fn parse_date_key(raw: &str) -> Result<NaiveDate, EventError> {
    let date_part = raw
        .split_once('T')
        .or_else(|| raw.split_once(' '))
        .map(|(date, _)| date)
        .unwrap_or(raw);

    NaiveDate::parse_from_str(date_part, DATE_KEY_FORMAT)
        .map_err(|_| EventError::MalformedDate(raw.to_string()))
}

/// Parses a date that must already be a bare `yyyy-MM-dd` string, with no
/// time suffix. Used when validating creation payloads.
pub fn parse_date_key_strict(raw: &str) -> Result<NaiveDate, EventError> {
    NaiveDate::parse_from_str(raw, DATE_KEY_FORMAT)
        .map_err(|_| EventError::MalformedDate(raw.to_string()))
}

/// Formats a date as its binning key.
pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}
