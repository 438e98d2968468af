//! Collaborator abstractions.
//!
//! The availability core talks to the outside world only through these traits:
//! a fetcher for the reservation API, a resolver for display labels and a sink
//! for the finished summary. Tests plug in canned implementations.

use std::future::Future;
use std::pin::Pin;

use crate::models::RawAvailabilityResponse;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Source of raw availability for one location at a time.
///
/// Type id and start date are fixed per fetcher instance; only the location varies.
pub trait AvailabilityFetcher: Send + Sync {
    /// Error type returned by fetch operations.
    type Error: std::error::Error + Send + Sync + 'static;

    fn fetch(&self, location_id: &str) -> BoxFuture<'_, RawAvailabilityResponse, Self::Error>;
}

/// Maps a location id to the label shown in summaries.
pub trait LabelResolver: Send + Sync {
    /// Returns the display label, or the raw id when no mapping exists.
    fn resolve(&self, location_id: &str) -> String;
}

/// Payload shape used when delivering a summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryFormat {
    /// The summary text as a `text/plain` body.
    Text,
    /// `{"<key>": "<summary>"}`
    Json { key: String },
}

impl DeliveryFormat {
    /// Parse `"text"` or `"json"` (case-insensitive). Anything else yields `None`.
    pub fn parse(format: &str, json_key: &str) -> Option<Self> {
        match format.trim().to_lowercase().as_str() {
            "text" => Some(DeliveryFormat::Text),
            "json" => Some(DeliveryFormat::Json {
                key: json_key.to_string(),
            }),
            _ => None,
        }
    }
}

/// Destination for the rendered run summary.
pub trait NotificationSink: Send + Sync {
    /// Error type returned by delivery.
    type Error: std::error::Error + Send + Sync + 'static;

    fn deliver<'a>(
        &'a self,
        text: &'a str,
        format: &'a DeliveryFormat,
    ) -> BoxFuture<'a, (), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_format_parse() {
        assert_eq!(DeliveryFormat::parse("text", "content"), Some(DeliveryFormat::Text));
        assert_eq!(
            DeliveryFormat::parse(" JSON ", "content"),
            Some(DeliveryFormat::Json {
                key: "content".to_string()
            })
        );
        assert_eq!(DeliveryFormat::parse("xml", "content"), None);
    }
}
