// --- File: crates/services/slotwatch_runner/src/lib.rs ---
pub mod run;
pub mod service_factory;

pub use run::{execute, print_summary, write_artifacts, RunOutcome};
