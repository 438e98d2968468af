//! Temporal predicates deciding whether a calendar date qualifies.
//!
//! Each predicate is true when its configuration is absent. All comparisons are
//! on whole UTC calendar days; the time part of `now` only matters through the
//! date it falls on.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use std::collections::HashSet;

use crate::models::{FilterConfig, WeekTarget};
use crate::time::{resolve_weekday_spec, weekday_number};

/// `0 <= days(date - today) <= window_days`.
pub fn within_window(date: NaiveDate, now: DateTime<Utc>, window_days: Option<i64>) -> bool {
    let Some(window) = window_days else {
        return true;
    };
    let delta = date.signed_duration_since(now.date_naive()).num_days();
    (0..=window).contains(&delta)
}

/// The date's weekday is one of `weekdays`.
pub fn weekday_allowed(date: NaiveDate, weekdays: Option<&HashSet<Weekday>>) -> bool {
    weekdays.map_or(true, |set| set.contains(&date.weekday()))
}

/// The calendar date of the next `target.weekday` on or after today, plus
/// `target.week_offset` weeks. `None` when the offset runs out of range.
pub fn target_date(now: DateTime<Utc>, target: &WeekTarget) -> Option<NaiveDate> {
    let today = i64::from(weekday_number(now.weekday()));
    let wanted = i64::from(weekday_number(target.weekday));
    let days = (wanted - today + 7)
        .rem_euclid(7)
        .checked_add(target.week_offset.checked_mul(7)?)?;
    now.date_naive().checked_add_signed(Duration::try_days(days)?)
}

/// The date is exactly the target date.
pub fn matches_target(date: NaiveDate, now: DateTime<Utc>, target: Option<&WeekTarget>) -> bool {
    match target {
        None => true,
        Some(target) => target_date(now, target) == Some(date),
    }
}

/// Window, weekday list and week target combined with AND.
pub fn is_eligible_date(date: NaiveDate, filter: &FilterConfig) -> bool {
    within_window(date, filter.now, filter.window_days)
        && weekday_allowed(date, filter.weekdays.as_ref())
        && matches_target(date, filter.now, filter.target.as_ref())
}

/// Parses a comma-separated weekday list of names or ISO numbers.
///
/// Unrecognised entries are skipped. A list with no recognised entry yields
/// `None`, i.e. no weekday constraint.
pub fn parse_weekday_list(raw: &str) -> Option<HashSet<Weekday>> {
    let set: HashSet<Weekday> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(resolve_weekday_spec)
        .collect();
    if set.is_empty() {
        None
    } else {
        Some(set)
    }
}
