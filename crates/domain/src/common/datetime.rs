//! Local wall-clock parsing utilities with consistent error handling.
//!
//! The calendar works on host-local wall time, so timestamps are parsed as
//! `NaiveDateTime` without any offset.

use chrono::NaiveDateTime;

const ISO_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const SPACED_LOCAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a local timestamp (`2025-09-08T00:00:00` or `2025-09-08 00:00:00`).
///
/// # Examples
///
/// ```
/// use rpgcal_domain::common::parse_local_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_local_datetime("2025-09-08T00:00:00").unwrap();
/// assert_eq!(dt.year(), 2025);
/// ```
///
/// # Errors
///
/// Returns the `chrono::ParseError` of the space-separated format if neither matches.
pub fn parse_local_datetime(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, ISO_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, SPACED_LOCAL_FORMAT))
}
