// --- File: crates/slotwatch_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for slotwatch.
///
/// Each crate keeps its own specific error enum and converts into this one at the
/// boundary where the run decides what to do with a failure.
#[derive(Error, Debug)]
pub enum SlotwatchError {
    /// Missing credential or location list. Fatal to the run.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Non-success response or transport failure for one location.
    #[error("Fetch failed: {0}")]
    FetchError(String),

    /// Malformed response body. Handled like a fetch failure.
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// The notification sink could not be reached. Logged, never fatal.
    #[error("Delivery failed: {0}")]
    DeliveryError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, SlotwatchError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, SlotwatchError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, SlotwatchError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| SlotwatchError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, SlotwatchError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| SlotwatchError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> SlotwatchError {
    SlotwatchError::ConfigError(message.to_string())
}

pub fn delivery_error<T: fmt::Display>(message: T) -> SlotwatchError {
    SlotwatchError::DeliveryError(message.to_string())
}
