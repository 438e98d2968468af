/// Webhook implementation of the notification sink.
pub mod service;

pub use service::{notify, WebhookError, WebhookSink};
