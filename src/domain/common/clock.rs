//! Millisecond timestamps

use chrono::{DateTime, FixedOffset, NaiveTime, TimeZone, Utc};

/// Milliseconds since the Unix epoch
pub fn get_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Milliseconds since the Unix epoch for the given time
pub fn millis_for_time<Tz: TimeZone>(time: &DateTime<Tz>) -> i64 {
    time.timestamp_millis()
}

/// Time for a millisecond timestamp, `None` when out of range
pub fn time_for_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Start of the day of `time`, evaluated in a fixed zone `offset_secs` east of UTC
pub fn start_of_day_millis<Tz: TimeZone>(time: &DateTime<Tz>, offset_secs: i32) -> Option<i64> {
    day_boundary_millis(time, offset_secs, NaiveTime::from_hms_opt(0, 0, 0)?)
}

/// Last nanosecond of the day of `time`, evaluated in a fixed zone `offset_secs` east of UTC
pub fn end_of_day_millis<Tz: TimeZone>(time: &DateTime<Tz>, offset_secs: i32) -> Option<i64> {
    day_boundary_millis(
        time,
        offset_secs,
        NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)?,
    )
}

fn day_boundary_millis<Tz: TimeZone>(
    time: &DateTime<Tz>,
    offset_secs: i32,
    at: NaiveTime,
) -> Option<i64> {
    let zone = FixedOffset::east_opt(offset_secs)?;
    let local = time.date_naive().and_time(at);

    zone.from_local_datetime(&local)
        .single()
        .map(|t| t.timestamp_millis())
}

/// Pad one-digit date parts with a leading zero, `2024-1-5` -> `2024-01-05`
pub fn pad_date_string_zeros(date: &str) -> String {
    date.split('-')
        .map(|part| {
            if part.len() == 1 {
                format!("0{}", part)
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
