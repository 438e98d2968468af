//! Per-location aggregation.
//!
//! Locations are processed strictly one after another in the configured order.
//! A failing location is recorded and skipped; it never aborts the run.

use slotwatch_common::models::RawAvailabilityResponse;
use slotwatch_common::services::{AvailabilityFetcher, LabelResolver};
use slotwatch_common::SlotwatchError;
use tracing::{debug, info, warn};

use crate::models::{DateLine, DateOrder, FilterConfig, LocationOutcome, LocationSummary, RunSummary};
use crate::slots::summarize_date;

/// Qualifying date lines of one response, ordered per `filter.date_order` and
/// capped at `filter.max_dates_per_location`.
pub fn summarize_response(resp: &RawAvailabilityResponse, filter: &FilterConfig) -> Vec<DateLine> {
    let mut lines: Vec<DateLine> = resp
        .location_availability_dates
        .iter()
        .filter_map(|day| summarize_date(day, filter))
        .collect();
    if filter.date_order == DateOrder::NewestFirst {
        lines.sort_by(|a, b| b.date.cmp(&a.date));
    }
    if let Some(max) = filter.max_dates_per_location {
        lines.truncate(max);
    }
    lines
}

pub struct Aggregator<F, L> {
    fetcher: F,
    labels: L,
    filter: FilterConfig,
}

impl<F, L> Aggregator<F, L>
where
    F: AvailabilityFetcher,
    L: LabelResolver,
    SlotwatchError: From<F::Error>,
{
    pub fn new(fetcher: F, labels: L, filter: FilterConfig) -> Self {
        Self {
            fetcher,
            labels,
            filter,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetches and summarizes a single location.
    pub async fn summarize_location(&self, location_id: &str) -> LocationSummary {
        let label = self.labels.resolve(location_id);
        let outcome = match self.fetcher.fetch(location_id).await {
            Ok(resp) => {
                let lines = summarize_response(&resp, &self.filter);
                debug!(
                    "Location {}: {} of {} dates qualify",
                    location_id,
                    lines.len(),
                    resp.location_availability_dates.len()
                );
                if lines.is_empty() {
                    LocationOutcome::NoSlots
                } else {
                    LocationOutcome::Available(lines)
                }
            }
            Err(err) => {
                let reason = err.to_string();
                warn!("Skipping location {}: {}", location_id, SlotwatchError::from(err));
                LocationOutcome::Failed(reason)
            }
        };

        LocationSummary {
            location_id: location_id.to_string(),
            label,
            outcome,
        }
    }

    /// Runs every location in order and collects the summary.
    pub async fn run(&self, location_ids: &[String]) -> RunSummary {
        let mut locations = Vec::with_capacity(location_ids.len());
        for location_id in location_ids {
            locations.push(self.summarize_location(location_id).await);
        }
        let summary = RunSummary::new(locations);
        info!(
            "Checked {} locations, availability found: {}",
            summary.locations.len(),
            summary.found
        );
        summary
    }
}
