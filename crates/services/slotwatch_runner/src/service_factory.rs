// --- File: crates/services/slotwatch_runner/src/service_factory.rs ---
//! Builds the run's collaborators from settings.

use slotwatch_availability::{FetchError, HttpAvailabilityFetcher, MapLabelResolver, RunPlan};
use slotwatch_common::services::DeliveryFormat;
use slotwatch_config::{Settings, DEFAULT_WEBHOOK_JSON_KEY};
use slotwatch_webhook::WebhookSink;
use tracing::{info, warn};

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// HTTP fetcher for the reservation API described by the plan.
pub fn build_fetcher(plan: &RunPlan) -> Result<HttpAvailabilityFetcher, FetchError> {
    info!(
        "ℹ️ Initializing availability fetcher for {} (type {})",
        plan.fetcher.base_url, plan.fetcher.type_id
    );
    HttpAvailabilityFetcher::new(plan.fetcher.clone())
}

pub fn build_labels(plan: &RunPlan) -> MapLabelResolver {
    MapLabelResolver::from_json_or_default(plan.location_names.as_deref())
}

/// Webhook sink, when `WEBHOOK_URL` is set.
pub fn build_sink(settings: &Settings) -> Option<WebhookSink> {
    let url = non_empty(&settings.webhook_url)?;
    info!("ℹ️ Webhook notifications enabled");
    Some(WebhookSink::new(url))
}

/// `WEBHOOK_FORMAT` / `WEBHOOK_JSON_KEY`; defaults to JSON under `content`.
pub fn delivery_format(settings: &Settings) -> DeliveryFormat {
    let key = non_empty(&settings.webhook_json_key).unwrap_or(DEFAULT_WEBHOOK_JSON_KEY);
    let default = DeliveryFormat::Json {
        key: key.to_string(),
    };
    match non_empty(&settings.webhook_format) {
        None => default,
        Some(format) => DeliveryFormat::parse(format, key).unwrap_or_else(|| {
            warn!("Unknown WEBHOOK_FORMAT {:?}, using json", format);
            default
        }),
    }
}
