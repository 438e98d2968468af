//! Minute-of-day arithmetic, 12-hour formatting and weekday lookup.
//!
//! `chrono::Weekday` is the one weekday type used across the crate. Numbers
//! follow ISO 8601 (Monday = 1 .. Sunday = 7) in both directions.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Timestamp layout used by the reservation API, e.g. `2025-09-17T13:30:00`.
pub const API_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const WEEKDAY_NAMES: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
    (Weekday::Sun, "Sunday"),
];

/// Minutes since midnight of a time value.
pub fn minute_of_day<T: Timelike>(time: &T) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Parses `"HH:MM"` (24-hour) or `"h:mm AM|PM"` into minutes since midnight.
///
/// Blank input means "unbounded" and yields `None`, as does anything malformed.
pub fn parse_time_of_day(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%I:%M %p"))
        .ok()
        .map(|t| minute_of_day(&t))
}

/// Formats minutes since midnight as `h:mm AM|PM`.
///
/// Hour 0 shows as 12. Values past midnight (a slot ending after 24:00) wrap around.
pub fn format_minutes_of_day(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    let (hour, minute) = (minutes / 60, minutes % 60);
    let (hour12, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{}:{:02} {}", hour12, minute, suffix)
}

/// Case-insensitive full English weekday name.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    let name = name.trim();
    WEEKDAY_NAMES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(w, _)| *w)
}

/// ISO weekday number, 1 = Monday .. 7 = Sunday.
pub fn weekday_from_number(number: u32) -> Option<Weekday> {
    number
        .checked_sub(1)
        .and_then(|i| WEEKDAY_NAMES.get(i as usize))
        .map(|(w, _)| *w)
}

pub fn weekday_number(weekday: Weekday) -> u32 {
    weekday.number_from_monday()
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize].1
}

/// Resolves a configured weekday token: digits are an ISO number, anything else a name.
pub fn resolve_weekday_spec(token: &str) -> Option<Weekday> {
    let token = token.trim();
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return token.parse().ok().and_then(weekday_from_number);
    }
    weekday_from_name(token)
}

/// Parses an API timestamp. RFC 3339 values are accepted too and reduced to UTC.
pub fn parse_api_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, API_DATETIME_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

/// Calendar date of an API date field (`2025-09-17T00:00:00` or `2025-09-17`).
pub fn parse_api_date(value: &str) -> Option<NaiveDate> {
    parse_api_datetime(value)
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok())
}
