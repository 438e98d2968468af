// --- File: crates/slotwatch_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Reservation API wire models
pub mod services; // Collaborator abstractions

// Re-export error types and utilities for easier access
pub use error::{config_error, delivery_error, Context, SlotwatchError};

// Re-export HTTP utilities for easier access
pub use http::client::{create_client, post_json, post_text, HTTP_CLIENT};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error, log_result};
