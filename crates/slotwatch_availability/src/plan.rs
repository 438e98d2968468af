//! Turns loaded [`Settings`] into a validated plan for one run.

use chrono::{DateTime, TimeZone, Utc};
use slotwatch_common::http::client::DEFAULT_TIMEOUT_SECS;
use slotwatch_common::{config_error, SlotwatchError};
use slotwatch_config::Settings;
use std::str::FromStr;
use tracing::warn;

use crate::models::{DateOrder, FilterConfig, RenderOptions, WeekTarget};
use crate::predicates::parse_weekday_list;
use crate::time::{parse_time_of_day, resolve_weekday_spec};

/// Connection parameters of the reservation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub base_url: String,
    pub type_id: String,
    pub start_date: String,
    pub bearer_token: String,
    pub origin: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

/// Everything a run needs, checked up front.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub location_ids: Vec<String>,
    pub fetcher: FetcherConfig,
    pub filter: FilterConfig,
    pub render: RenderOptions,
    /// Raw `LOCATION_NAMES` JSON, if configured
    pub location_names: Option<String>,
}

/// Trimmed value, `None` when absent or blank.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_number<T: FromStr>(key: &str, value: &Option<String>) -> Option<T> {
    let raw = non_empty(value)?;
    match raw.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!("Ignoring {}: {:?} is not a valid number", key, raw);
            None
        }
    }
}

/// Location ids from a comma and/or whitespace separated list.
///
/// Surrounding quotes are stripped and only digits are kept; pieces without any
/// digit are dropped.
pub fn parse_location_ids(raw: &str) -> Vec<String> {
    raw.replace(',', " ")
        .split_whitespace()
        .map(|piece| piece.trim_matches(|c| c == '"' || c == '\''))
        .map(|piece| piece.chars().filter(char::is_ascii_digit).collect::<String>())
        .filter(|id| !id.is_empty())
        .collect()
}

/// `NOW_EPOCH` when set and valid, otherwise `wall_clock`.
pub fn resolve_now(settings: &Settings, wall_clock: DateTime<Utc>) -> DateTime<Utc> {
    parse_number::<i64>("NOW_EPOCH", &settings.now_epoch)
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .unwrap_or(wall_clock)
}

/// `DATE_ORDER`; unknown values are logged and fall back to response order.
pub fn date_order_from_settings(settings: &Settings) -> DateOrder {
    match non_empty(&settings.date_order) {
        None => DateOrder::default(),
        Some(raw) => DateOrder::parse(raw).unwrap_or_else(|| {
            warn!("Ignoring DATE_ORDER: {:?} is not response or newest_first", raw);
            DateOrder::default()
        }),
    }
}

/// Builds the temporal filter. Invalid values are logged and treated as unset.
pub fn filter_from_settings(settings: &Settings, now: DateTime<Utc>) -> FilterConfig {
    let time_bound = |key: &str, value: &Option<String>| {
        let raw = non_empty(value)?;
        let minutes = parse_time_of_day(raw);
        if minutes.is_none() {
            warn!("Ignoring {}: {:?} is not a time of day", key, raw);
        }
        minutes
    };

    let window_days = parse_number::<i64>("DATE_WINDOW_DAYS", &settings.date_window_days)
        .filter(|days| {
            if *days < 0 {
                warn!("Ignoring negative DATE_WINDOW_DAYS: {}", days);
            }
            *days >= 0
        });

    let weekdays = non_empty(&settings.weekdays).and_then(|raw| {
        let set = parse_weekday_list(raw);
        if set.is_none() {
            warn!("Ignoring WEEKDAYS: no recognised weekday in {:?}", raw);
        }
        set
    });

    let target_weekday = non_empty(&settings.target_weekday).and_then(|raw| {
        let weekday = resolve_weekday_spec(raw);
        if weekday.is_none() {
            warn!("Ignoring TARGET_WEEKDAY: {:?} is not a weekday", raw);
        }
        weekday
    });
    let week_offset = parse_number::<i64>("WEEK_OFFSET", &settings.week_offset);
    let target = match (target_weekday, week_offset) {
        (Some(weekday), Some(week_offset)) => Some(WeekTarget {
            weekday,
            week_offset,
        }),
        _ => None,
    };

    FilterConfig {
        time_from: time_bound("TIME_FROM", &settings.time_from),
        time_to: time_bound("TIME_TO", &settings.time_to),
        window_days,
        weekdays,
        target,
        max_dates_per_location: parse_number("MAX_DATES_PER_LOCATION", &settings.max_dates_per_location),
        date_order: date_order_from_settings(settings),
        now,
    }
}

/// Validates credentials and locations and assembles the run plan.
///
/// # Errors
///
/// `SlotwatchError::ConfigError` when the bearer token is missing or no location
/// id can be parsed. No request has been made at that point.
pub fn prepare_run(settings: &Settings, wall_clock: DateTime<Utc>) -> Result<RunPlan, SlotwatchError> {
    let token = non_empty(&settings.bearer_token);
    let location_ids = non_empty(&settings.location_ids)
        .map(parse_location_ids)
        .unwrap_or_default();
    let Some(token) = token.filter(|_| !location_ids.is_empty()) else {
        return Err(config_error("Missing BEARER_TOKEN or LOCATION_IDS"));
    };

    let now = resolve_now(settings, wall_clock);
    let fetcher = FetcherConfig {
        base_url: settings.base_url.trim().to_string(),
        type_id: settings.type_id.trim().to_string(),
        start_date: non_empty(&settings.start_date)
            .map(str::to_string)
            .unwrap_or_else(|| now.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
        bearer_token: token.to_string(),
        origin: settings.origin.trim().to_string(),
        user_agent: settings.user_agent.clone(),
        timeout_secs: settings.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
    };

    Ok(RunPlan {
        location_ids,
        fetcher,
        filter: filter_from_settings(settings, now),
        render: RenderOptions {
            title: non_empty(&settings.summary_title).map(str::to_string),
            footer: non_empty(&settings.summary_footer).map(str::to_string),
            date_order: date_order_from_settings(settings),
        },
        location_names: non_empty(&settings.location_names).map(str::to_string),
    })
}
