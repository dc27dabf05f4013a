//! Parsing and formatting of the scheduled publish time.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Formats accepted from a date-time picker, interpreted in local time.
const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a schedule entered as text.
///
/// Accepts RFC 3339 timestamps and the offset-less picker form
/// `YYYY-MM-DDTHH:MM[:SS]`, the latter read as local time. Returns `None`
/// for blank or unparseable input. Past dates are accepted.
///
/// # Examples
///
/// ```
/// use postcraft_core::parse_schedule;
///
/// assert!(parse_schedule("2030-05-01T10:00:00Z").is_some());
/// assert!(parse_schedule("2030-05-01T10:00").is_some());
/// assert!(parse_schedule("next tuesday").is_none());
/// assert!(parse_schedule("").is_none());
/// ```
pub fn parse_schedule(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }

    LOCAL_FORMATS.iter().find_map(|format| {
        let naive = NaiveDateTime::parse_from_str(input, format).ok()?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    })
}

/// Render a schedule as ISO-8601 UTC with millisecond precision.
///
/// # Examples
///
/// ```
/// use postcraft_core::{format_schedule, parse_schedule};
///
/// let at = parse_schedule("2030-05-01T10:00:00+02:00").unwrap();
/// assert_eq!(format_schedule(&at), "2030-05-01T08:00:00.000Z");
/// ```
pub fn format_schedule(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_offsets_normalise_to_utc() {
        let at = parse_schedule("2030-01-01T00:30:00-01:00").unwrap();
        assert_eq!(format_schedule(&at), "2030-01-01T01:30:00.000Z");
    }

    #[test]
    fn picker_format_round_trips_through_local_time() {
        let at = parse_schedule("2030-06-15T12:45").unwrap();
        let local = at.with_timezone(&Local);
        assert_eq!(local.format("%Y-%m-%dT%H:%M").to_string(), "2030-06-15T12:45");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(parse_schedule("  2030-06-15T12:45:10 ").is_some());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_schedule("2030-13-40T99:99").is_none());
        assert!(parse_schedule("   ").is_none());
    }
}
