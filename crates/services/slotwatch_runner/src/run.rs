//! One availability run: plan, aggregate, render, notify.
//!
//! Every path ends in a definite [`RunOutcome`]; configuration problems turn
//! into `found = false` before any request is made.

use chrono::{DateTime, Utc};
use slotwatch_availability::{prepare_run, Aggregator, RunPlan};
use slotwatch_common::services::{AvailabilityFetcher, NotificationSink};
use slotwatch_common::{log_error, Context, SlotwatchError};
use slotwatch_config::Settings;
use slotwatch_webhook::notify;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::service_factory::{build_labels, delivery_format};

pub const SUMMARY_FILE: &str = "summary.txt";
pub const FOUND_FILE: &str = "found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub summary: String,
    pub found: bool,
}

impl RunOutcome {
    /// A run that stopped early with `message` as its summary.
    pub fn aborted(err: &SlotwatchError) -> Self {
        let message = match err {
            SlotwatchError::ConfigError(message) => message.clone(),
            other => other.to_string(),
        };
        Self {
            summary: format!("{}\n", message),
            found: false,
        }
    }
}

/// Runs all configured locations and delivers the summary if anything was found.
///
/// `make_fetcher` is only called once the plan is valid.
pub async fn execute<F, Mk, S>(
    settings: &Settings,
    wall_clock: DateTime<Utc>,
    make_fetcher: Mk,
    sink: Option<&S>,
) -> RunOutcome
where
    F: AvailabilityFetcher,
    SlotwatchError: From<F::Error>,
    Mk: FnOnce(&RunPlan) -> Result<F, F::Error>,
    S: NotificationSink,
{
    let plan = match prepare_run(settings, wall_clock) {
        Ok(plan) => plan,
        Err(err) => {
            log_error(&err, "Aborting run");
            return RunOutcome::aborted(&err);
        }
    };
    info!(
        "Checking {} locations (now = {})",
        plan.location_ids.len(),
        plan.filter.now
    );

    let fetcher = match make_fetcher(&plan) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            let err = SlotwatchError::from(err);
            log_error(&err, "Could not build fetcher");
            return RunOutcome::aborted(&err);
        }
    };

    let aggregator = Aggregator::new(fetcher, build_labels(&plan), plan.filter.clone());
    let summary = aggregator.run(&plan.location_ids).await;
    let text = summary.render(&plan.render);

    notify(&text, summary.found, sink, &delivery_format(settings)).await;

    RunOutcome {
        summary: text,
        found: summary.found,
    }
}

/// Writes the summary to `out`. A failed write is logged; returns whether it succeeded.
pub fn print_summary<W: Write>(out: &mut W, summary: &str) -> bool {
    match out.write_all(summary.as_bytes()).and_then(|()| out.flush()) {
        Ok(()) => true,
        Err(err) => {
            log_error(err, "Failed to print summary");
            false
        }
    }
}

/// Writes `summary.txt` and `found` (`true`/`false`) into `dir`, creating it if needed.
pub fn write_artifacts(dir: &Path, outcome: &RunOutcome) -> Result<(), SlotwatchError> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    fs::write(dir.join(SUMMARY_FILE), &outcome.summary).context("writing summary")?;
    fs::write(
        dir.join(FOUND_FILE),
        if outcome.found { "true" } else { "false" },
    )
    .context("writing found flag")?;
    Ok(())
}
