//! Tolerant date parsing for loosely-typed document dates.
//!
//! Source documents carry dates as raw strings in a handful of shapes
//! (RFC 3339 timestamps from the store, bare `YYYY-MM-DD` from forms).
//! Parsing never fails loudly: an absent or unrecognized date becomes
//! `None`, which sorts as the Unix epoch and is excluded from date-range
//! filtering.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// The sort fallback for entries whose date is missing or unparseable.
pub const EPOCH: NaiveDateTime = NaiveDateTime::UNIX_EPOCH;

/// Parse a raw document date string.
///
/// Accepted shapes, tried in order:
///
/// 1. RFC 3339 with offset (`2024-01-05T10:30:00+05:30`), converted to naive UTC
/// 2. `YYYY-MM-DDTHH:MM:SS` with optional fractional seconds
/// 3. `YYYY-MM-DD HH:MM:SS`
/// 4. Bare `YYYY-MM-DD` (midnight)
///
/// Returns `None` for anything else; never panics.
///
/// # Example
///
/// ```
/// use tillbook_core::datetime::parse_datetime;
///
/// assert!(parse_datetime("2024-01-05").is_some());
/// assert!(parse_datetime("2024-01-05T10:30:00Z").is_some());
/// assert!(parse_datetime("not a date").is_none());
/// ```
#[must_use]
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN));
    }
    None
}

/// Midnight at the start of the given day.
#[must_use]
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// The last representable millisecond of the given day (23:59:59.999).
///
/// Used to make a `to` bound inclusive of the whole day.
#[must_use]
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    // 23:59:59.999 is always a valid time of day
    date.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_date() {
        let dt = parse_datetime("2024-01-05").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(dt.time(), NaiveTime::MIN);
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_datetime("2024-01-05T10:30:00Z").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());

        // Offset converts to UTC
        let dt = parse_datetime("2024-01-05T01:00:00+05:00").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
    }

    #[test]
    fn test_parse_datetime_without_offset() {
        assert!(parse_datetime("2024-01-05T10:30:00").is_some());
        assert!(parse_datetime("2024-01-05T10:30:00.123").is_some());
        assert!(parse_datetime("2024-01-05 10:30:00").is_some());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_datetime("").is_none());
        assert!(parse_datetime("   ").is_none());
        assert!(parse_datetime("not a date").is_none());
        assert!(parse_datetime("2024-13-40").is_none());
        assert!(parse_datetime("05/01/2024").is_none());
    }

    #[test]
    fn test_end_of_day_after_start() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(end_of_day(d) > start_of_day(d));
        assert_eq!(end_of_day(d).date(), d);
    }
}
