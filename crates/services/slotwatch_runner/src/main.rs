// File: services/slotwatch_runner/src/main.rs
use chrono::Utc;
use slotwatch_common::logging::{self, level_from_name};
use slotwatch_common::{config_error, log_error, log_result};
use slotwatch_config::{load_settings, redacted, Settings};
use slotwatch_runner::service_factory::{build_fetcher, build_sink};
use slotwatch_runner::{execute, print_summary, write_artifacts, RunOutcome};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let (settings, outcome) = match load_settings() {
        Ok(settings) => {
            logging::init_with_level(level_from_name(settings.log_level.as_deref()));
            debug!("Settings: {}", redacted(&settings));

            let sink = build_sink(&settings);
            let outcome = execute(&settings, Utc::now(), build_fetcher, sink.as_ref()).await;
            (settings, outcome)
        }
        Err(err) => {
            logging::init();
            let err = config_error(err);
            log_error(&err, "Failed to load settings");
            (Settings::default(), RunOutcome::aborted(&err))
        }
    };

    print_summary(&mut std::io::stdout().lock(), &outcome.summary);

    let written = log_result(
        write_artifacts(Path::new(&settings.output_dir), &outcome),
        "Artifacts written",
        "Failed to write artifacts",
    );
    if written.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
