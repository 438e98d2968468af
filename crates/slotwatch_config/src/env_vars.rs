//! Environment variable handling for slotwatch.
//!
//! Settings are read from plain upper-case environment variables (`BASE_URL`,
//! `LOCATION_IDS`, ...). Only the keys listed in [`SETTINGS_KEYS`] are handed to
//! the configuration builder so unrelated process variables never leak into it.

use config::Map;
use serde_json::Value;

/// Settings keys in their lower-case form, as used by [`crate::Settings`].
pub const SETTINGS_KEYS: &[&str] = &[
    "base_url",
    "type_id",
    "start_date",
    "location_ids",
    "bearer_token",
    "origin",
    "user_agent",
    "request_timeout_secs",
    "location_names",
    "time_from",
    "time_to",
    "date_window_days",
    "weekdays",
    "week_offset",
    "target_weekday",
    "now_epoch",
    "max_dates_per_location",
    "date_order",
    "summary_title",
    "summary_footer",
    "output_dir",
    "log_level",
    "webhook_url",
    "webhook_format",
    "webhook_json_key",
];

/// Placeholder written in place of secret values when settings are logged.
pub const REDACTED: &str = "***";

/// Collect the known settings keys from a set of environment variables.
///
/// Variable names are matched case-insensitively and the returned map is keyed by
/// the lower-case settings key. Unknown variables are ignored.
pub fn collect_settings_env<I>(vars: I) -> Map<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut collected = Map::new();
    for (name, value) in vars {
        let key = name.to_lowercase();
        if SETTINGS_KEYS.contains(&key.as_str()) {
            collected.insert(key, value);
        }
    }
    collected
}

/// Check if a settings key holds a secret
///
/// Keys containing "token", "secret", "password" or "webhook_url" are considered
/// secret. Webhook URLs usually embed their own credentials.
pub fn is_secret_key(key: &str) -> bool {
    let key = key.to_lowercase();
    key.contains("token")
        || key.contains("secret")
        || key.contains("password")
        || key == "webhook_url"
}

/// Replace every non-null secret value in a JSON object with [`REDACTED`].
///
/// Returns `true` if any value was replaced.
pub fn redact_secrets(value: &mut Value) -> bool {
    fn walk(key: Option<&str>, obj: &mut Value) -> bool {
        let mut replaced = false;
        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    replaced |= walk(Some(k.as_str()), v);
                }
            }
            Value::String(s) if key.is_some_and(is_secret_key) => {
                *s = REDACTED.to_string();
                replaced = true;
            }
            _ => {}
        }
        replaced
    }

    walk(None, value)
}
