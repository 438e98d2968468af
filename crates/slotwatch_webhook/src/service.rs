use serde_json::{Map, Value};
use slotwatch_common::services::{BoxFuture, DeliveryFormat, NotificationSink};
use slotwatch_common::{delivery_error, log_error, post_json, post_text};
use thiserror::Error;
use tracing::info;

/// Webhook-specific error types.
#[derive(Error, Debug)]
pub enum WebhookError {
    /// Error occurred while sending the request
    #[error("Webhook request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Webhook returned an error: {message} (Status: {status_code})")]
    Status { status_code: u16, message: String },
}

/// Posts summaries to a fixed URL (Discord, Slack, generic HTTP endpoints).
pub struct WebhookSink {
    url: String,
}

impl WebhookSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    async fn post(&self, text: &str, format: &DeliveryFormat) -> Result<(), WebhookError> {
        let resp = match format {
            DeliveryFormat::Text => post_text(&self.url, text).await?,
            DeliveryFormat::Json { key } => {
                let mut body = Map::new();
                body.insert(key.clone(), Value::String(text.to_string()));
                post_json(&self.url, &Value::Object(body)).await?
            }
        };

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(WebhookError::Status {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}

impl NotificationSink for WebhookSink {
    type Error = WebhookError;

    fn deliver<'a>(
        &'a self,
        text: &'a str,
        format: &'a DeliveryFormat,
    ) -> BoxFuture<'a, (), Self::Error> {
        Box::pin(self.post(text, format))
    }
}

/// Sends `text` to `sink` when availability was found.
///
/// Returns whether a delivery succeeded. Failures are logged and never
/// propagated, so they cannot change the outcome of a run.
pub async fn notify<S: NotificationSink>(
    text: &str,
    found: bool,
    sink: Option<&S>,
    format: &DeliveryFormat,
) -> bool {
    let Some(sink) = sink else {
        return false;
    };
    if !found {
        info!("No availability found, skipping notification");
        return false;
    }
    match sink.deliver(text, format).await {
        Ok(()) => {
            info!("Summary delivered ({:?})", format);
            true
        }
        Err(err) => {
            log_error(delivery_error(err), "Notification failed");
            false
        }
    }
}
