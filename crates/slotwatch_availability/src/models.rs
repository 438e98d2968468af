// --- File: crates/slotwatch_availability/src/models.rs ---
use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::Serialize;
use std::collections::HashSet;

use crate::time::format_minutes_of_day;

// --- Filter Configuration ---

/// Order in which qualifying dates are listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateOrder {
    /// Dates as the API returns them, locations in configured order
    #[default]
    Response,
    /// Latest date first; available locations sorted by their latest date
    NewestFirst,
}

impl DateOrder {
    /// `"response"` or `"newest_first"` (case-insensitive, `-` allowed for `_`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "response" => Some(DateOrder::Response),
            "newest_first" => Some(DateOrder::NewestFirst),
            _ => None,
        }
    }
}

/// "The next `weekday`, shifted forward by `week_offset` whole weeks."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekTarget {
    pub weekday: Weekday,
    pub week_offset: i64,
}

/// Temporal constraints for one run. Every `None` means "no constraint".
///
/// `now` is captured once when the run starts and never re-read.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Inclusive lower bound on a slot's start, minutes since midnight
    pub time_from: Option<u32>,
    /// Exclusive upper bound on a slot's start, minutes since midnight
    pub time_to: Option<u32>,
    /// Inclusive day horizon from today
    pub window_days: Option<i64>,
    pub weekdays: Option<HashSet<Weekday>>,
    pub target: Option<WeekTarget>,
    /// Caps the dates listed per location, applied after ordering
    pub max_dates_per_location: Option<usize>,
    pub date_order: DateOrder,
    pub now: DateTime<Utc>,
}

impl FilterConfig {
    /// A configuration without constraints.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            time_from: None,
            time_to: None,
            window_days: None,
            weekdays: None,
            target: None,
            max_dates_per_location: None,
            date_order: DateOrder::Response,
            now,
        }
    }
}

// --- Intervals ---

/// Half-open minute-of-day range `[start, end)`.
///
/// `end` may exceed a day's 1440 minutes when a slot runs past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}–{}",
            format_minutes_of_day(self.start),
            format_minutes_of_day(self.end)
        )
    }
}

// --- Summaries ---

/// One qualifying date of a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateLine {
    pub date: NaiveDate,
    pub date_label: String,
    pub day_of_week: String,
    pub ranges_text: String,
}

impl std::fmt::Display for DateLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.date_label, self.day_of_week, self.ranges_text
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LocationOutcome {
    Available(Vec<DateLine>),
    NoSlots,
    /// The fetch or body parse failed; carries the reason.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationSummary {
    pub location_id: String,
    pub label: String,
    pub outcome: LocationOutcome,
}

impl LocationSummary {
    /// Latest qualifying date, if any.
    pub fn latest_date(&self) -> Option<NaiveDate> {
        match &self.outcome {
            LocationOutcome::Available(lines) => lines.iter().map(|line| line.date).max(),
            _ => None,
        }
    }

    pub fn has_availability(&self) -> bool {
        matches!(&self.outcome, LocationOutcome::Available(lines) if !lines.is_empty())
    }

    /// The text block for this location.
    pub fn render(&self) -> String {
        match &self.outcome {
            LocationOutcome::Available(lines) if !lines.is_empty() => {
                let mut block = format!("**{}**", self.label);
                for line in lines {
                    block.push('\n');
                    block.push_str(&line.to_string());
                }
                block
            }
            LocationOutcome::Available(_) | LocationOutcome::NoSlots => {
                format!("{} — no available time slots.", self.label)
            }
            LocationOutcome::Failed(reason) => {
                format!("{} — could not fetch availability ({}).", self.label, reason)
            }
        }
    }
}

/// Decoration around the rendered summary body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: Option<String>,
    pub footer: Option<String>,
    pub date_order: DateOrder,
}

/// Result of one pass over all configured locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub locations: Vec<LocationSummary>,
    pub found: bool,
}

impl RunSummary {
    pub fn new(locations: Vec<LocationSummary>) -> Self {
        let found = locations.iter().any(LocationSummary::has_availability);
        Self { locations, found }
    }

    /// Locations with availability first, then the rest in configured order.
    ///
    /// Available locations keep configured order, or with
    /// [`DateOrder::NewestFirst`] are sorted by their latest date, latest first.
    pub fn render(&self, options: &RenderOptions) -> String {
        let (mut available, rest): (Vec<&LocationSummary>, Vec<&LocationSummary>) = self
            .locations
            .iter()
            .partition(|loc| loc.has_availability());
        if options.date_order == DateOrder::NewestFirst {
            available.sort_by_key(|loc| std::cmp::Reverse(loc.latest_date()));
        }

        let mut sections: Vec<String> = Vec::new();
        if let Some(title) = options.title.as_deref() {
            sections.push(title.to_string());
        }
        if !available.is_empty() {
            sections.push(
                available
                    .iter()
                    .map(|loc| loc.render())
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            );
        }
        if !rest.is_empty() {
            sections.push(
                rest.iter()
                    .map(|loc| loc.render())
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }
        if let Some(footer) = options.footer.as_deref() {
            sections.push(footer.to_string());
        }

        let mut text = sections.join("\n\n").trim_end().to_string();
        text.push('\n');
        text
    }
}
