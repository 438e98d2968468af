// --- File: crates/slotwatch_config/src/models.rs ---

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str =
    "https://publicwebsiteapi.nydmvreservation.com/api/AvailableLocationDates";
pub const DEFAULT_TYPE_ID: &str = "204";
pub const DEFAULT_ORIGIN: &str = "https://public.nydmvreservation.com";
pub const DEFAULT_USER_AGENT: &str = "slotwatch/0.1 (+availability poller)";
pub const DEFAULT_OUTPUT_DIR: &str = ".availability";
pub const DEFAULT_WEBHOOK_JSON_KEY: &str = "content";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_type_id() -> String {
    DEFAULT_TYPE_ID.to_string()
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

// --- Unified Settings ---
// Every key maps 1:1 to an upper-case environment variable (BASE_URL, LOCATION_IDS, ...).
// Optional values stay raw strings here; empty strings count as absent and are
// normalised by the consumers.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    // --- Reservation API ---
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_type_id")]
    pub type_id: String,
    #[serde(default)]
    pub start_date: Option<String>, // ISO 8601 UTC, defaults to "now" at run time
    #[serde(default)]
    pub location_ids: Option<String>, // comma / whitespace separated
    #[serde(default)]
    pub bearer_token: Option<String>, // required
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub location_names: Option<String>, // JSON object: {"22": "Bethpage"}

    // --- Filters ---
    #[serde(default)]
    pub time_from: Option<String>,
    #[serde(default)]
    pub time_to: Option<String>,
    #[serde(default)]
    pub date_window_days: Option<String>,
    #[serde(default)]
    pub weekdays: Option<String>,
    #[serde(default)]
    pub week_offset: Option<String>,
    #[serde(default)]
    pub target_weekday: Option<String>,
    #[serde(default)]
    pub now_epoch: Option<String>,
    #[serde(default)]
    pub max_dates_per_location: Option<String>,
    #[serde(default)]
    pub date_order: Option<String>, // "response" | "newest_first"

    // --- Output ---
    #[serde(default)]
    pub summary_title: Option<String>,
    #[serde(default)]
    pub summary_footer: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub log_level: Option<String>,

    // --- Webhook ---
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub webhook_format: Option<String>, // "text" | "json"
    #[serde(default)]
    pub webhook_json_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            type_id: default_type_id(),
            start_date: None,
            location_ids: None,
            bearer_token: None,
            origin: default_origin(),
            user_agent: default_user_agent(),
            request_timeout_secs: None,
            location_names: None,
            time_from: None,
            time_to: None,
            date_window_days: None,
            weekdays: None,
            week_offset: None,
            target_weekday: None,
            now_epoch: None,
            max_dates_per_location: None,
            date_order: None,
            summary_title: None,
            summary_footer: None,
            output_dir: default_output_dir(),
            log_level: None,
            webhook_url: None,
            webhook_format: None,
            webhook_json_key: None,
        }
    }
}
