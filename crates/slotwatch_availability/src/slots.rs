//! Slot filtering and interval merging.

use chrono::Datelike;
use slotwatch_common::models::{AvailabilityDate, TimeSlot};
use tracing::debug;

use crate::models::{DateLine, FilterConfig, Interval};
use crate::predicates::is_eligible_date;
use crate::time::{minute_of_day, parse_api_date, parse_api_datetime, weekday_name};

/// Minute-of-day interval covered by a slot.
///
/// `None` if its start cannot be parsed or its end does not fit in a `u32`.
pub fn slot_interval(slot: &TimeSlot) -> Option<Interval> {
    let start = minute_of_day(&parse_api_datetime(&slot.start_date_time)?);
    let end = start.checked_add(slot.duration_minutes())?;
    Some(Interval::new(start, end))
}

/// Keeps slots whose *start* lies in `[time_from, time_to)`.
///
/// A slot starting before `time_to` is kept even if it ends after it.
pub fn filter_slots(slots: &[TimeSlot], time_from: Option<u32>, time_to: Option<u32>) -> Vec<Interval> {
    slots
        .iter()
        .filter_map(|slot| {
            let interval = slot_interval(slot);
            if interval.is_none() {
                debug!(
                    "Skipping slot starting {:?} lasting {:?}",
                    slot.start_date_time, slot.duration
                );
            }
            interval
        })
        .filter(|i| time_from.map_or(true, |from| i.start >= from))
        .filter(|i| time_to.map_or(true, |to| i.start < to))
        .collect()
}

/// Coalesces intervals that touch exactly (`next.start == last.end`).
///
/// Input order does not matter: intervals are sorted by `(start, end)` and exact
/// duplicates dropped first. Intervals that overlap without touching stay separate.
pub fn merge_touching(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_unstable();
    intervals.dedup();

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if interval.start == last.end => last.end = interval.end,
            _ => merged.push(interval),
        }
    }
    merged
}

/// `9:00 AM–9:30 AM, 10:00 AM–10:15 AM`
pub fn format_ranges(ranges: &[Interval]) -> String {
    ranges
        .iter()
        .map(Interval::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The display line for one API date, or `None` if the date does not qualify
/// or no slot survives the time-of-day bounds.
pub fn summarize_date(day: &AvailabilityDate, filter: &FilterConfig) -> Option<DateLine> {
    if day.available_time_slots.is_empty() {
        return None;
    }
    let Some(date) = parse_api_date(&day.availability_date) else {
        debug!("Skipping unparseable availability date {:?}", day.availability_date);
        return None;
    };
    if !is_eligible_date(date, filter) {
        return None;
    }

    let ranges = merge_touching(filter_slots(
        &day.available_time_slots,
        filter.time_from,
        filter.time_to,
    ));
    if ranges.is_empty() {
        return None;
    }

    let non_blank = |s: &Option<String>| {
        s.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    Some(DateLine {
        date,
        date_label: non_blank(&day.formatted_availability_date)
            .unwrap_or_else(|| date.format("%Y-%m-%d").to_string()),
        day_of_week: non_blank(&day.day_of_week)
            .unwrap_or_else(|| weekday_name(date.weekday()).to_string()),
        ranges_text: format_ranges(&ranges),
    })
}
