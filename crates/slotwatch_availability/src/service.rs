// --- File: crates/slotwatch_availability/src/service.rs ---
//! Reservation API client.
//!
//! This module provides the HTTP implementation of the `AvailabilityFetcher` trait.

use reqwest::{header, Client, StatusCode};
use slotwatch_common::models::RawAvailabilityResponse;
use slotwatch_common::services::{AvailabilityFetcher, BoxFuture};
use slotwatch_common::{create_client, SlotwatchError};
use thiserror::Error;
use tracing::debug;

use crate::plan::FetcherConfig;

/// Errors that can occur when fetching availability for a location.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure (DNS, TLS, timeout, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any status other than 200
    #[error("API returned status {status_code}")]
    Status { status_code: u16, body: String },

    /// Malformed response body
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<FetchError> for SlotwatchError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Parse(e) => SlotwatchError::ParseError(e.to_string()),
            other => SlotwatchError::FetchError(other.to_string()),
        }
    }
}

/// Fetches `GET {base_url}?locationId=..&typeId=..&startDate=..` with a bearer token.
pub struct HttpAvailabilityFetcher {
    client: Client,
    config: FetcherConfig,
}

impl HttpAvailabilityFetcher {
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let client = create_client(config.timeout_secs, true)?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: FetcherConfig) -> Self {
        Self { client, config }
    }

    async fn fetch_location(&self, location_id: &str) -> Result<RawAvailabilityResponse, FetchError> {
        let config = &self.config;
        debug!("Fetching availability for location {}", location_id);

        let resp = self
            .client
            .get(&config.base_url)
            .query(&[
                ("locationId", location_id),
                ("typeId", config.type_id.as_str()),
                ("startDate", config.start_date.as_str()),
            ])
            .header(header::ACCEPT, "application/json, text/plain, */*")
            .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(header::ORIGIN, config.origin.as_str())
            .header(header::REFERER, format!("{}/", config.origin))
            .header(header::USER_AGENT, config.user_agent.as_str())
            .header("Sec-Fetch-Dest", "empty")
            .header("Sec-Fetch-Mode", "cors")
            .header("Sec-Fetch-Site", "same-site")
            .bearer_auth(&config.bearer_token)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status_code: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl AvailabilityFetcher for HttpAvailabilityFetcher {
    type Error = FetchError;

    fn fetch(&self, location_id: &str) -> BoxFuture<'_, RawAvailabilityResponse, Self::Error> {
        let location_id = location_id.to_string();
        Box::pin(async move { self.fetch_location(&location_id).await })
    }
}
