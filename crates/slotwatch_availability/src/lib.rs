// --- File: crates/slotwatch_availability/src/lib.rs ---
// Declare modules within this crate
pub mod aggregate;
pub mod labels;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod plan;
pub mod predicates;
pub mod service;
pub mod slots;
pub mod time;
#[cfg(test)]
mod time_test;

pub use aggregate::{summarize_response, Aggregator};
pub use labels::MapLabelResolver;
pub use models::{
    DateLine, DateOrder, FilterConfig, Interval, LocationOutcome, LocationSummary, RenderOptions,
    RunSummary, WeekTarget,
};
pub use plan::{date_order_from_settings, parse_location_ids, prepare_run, FetcherConfig, RunPlan};
pub use service::{FetchError, HttpAvailabilityFetcher};
