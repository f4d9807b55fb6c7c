use chrono::{DateTime, TimeZone, Timelike, Utc};

/// Converts a timestamp in any zone to UTC, truncated to whole microseconds.
///
/// Stored timestamps never carry sub-microsecond precision, so values are truncated before they
/// reach the database and compare equal after a round trip.
pub fn to_utc_timestamp<Tz: TimeZone>(timestamp: DateTime<Tz>) -> DateTime<Utc> {
    let utc = timestamp.with_timezone(&Utc);
    let micros = utc.nanosecond() / 1_000 * 1_000;

    utc.with_nanosecond(micros).unwrap_or(utc)
}
