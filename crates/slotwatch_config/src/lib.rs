use config::{Config, ConfigError, Environment, File, Map};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod env_vars;
pub mod models;

pub use models::*;

/// Directory holding `default.toml` and `<RUN_ENV>.toml`, relative to the working directory.
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Loads settings from config files, `.env` and the process environment.
///
/// Sources, lowest precedence first:
/// 1. `config/default.*` (optional)
/// 2. `config/<RUN_ENV>.*` (optional, `RUN_ENV` defaults to "debug")
/// 3. environment variables named after the settings keys (`BEARER_TOKEN`, ...)
///
/// `CONFIG_DIR` overrides the config directory.
pub fn load_settings() -> Result<Settings, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

    let vars = env_vars::collect_settings_env(env::vars());
    load_settings_from(&config_dir, &run_env, vars)
}

/// Builds [`Settings`] from an explicit config directory and variable map.
pub fn load_settings_from(
    config_dir: &Path,
    run_env: &str,
    vars: Map<String, String>,
) -> Result<Settings, ConfigError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);

    debug!("config: default_path: {}", default_path.display());
    debug!("config: env_path: {}", env_path.display());

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(Environment::default().ignore_empty(true).source(Some(vars)));

    builder.build()?.try_deserialize()
}

/// Settings as a JSON value with secrets masked, for logging.
pub fn redacted(settings: &Settings) -> serde_json::Value {
    let mut json = serde_json::to_value(settings).unwrap_or(serde_json::Value::Null);
    env_vars::redact_secrets(&mut json);
    json
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is taken from `DOTENV_OVERRIDE`, else from the first command line
/// argument if it starts with ".env", else ".env". A missing file is not an error.
/// Returns the path that was tried.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
