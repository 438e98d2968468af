//! Display labels for location ids.

use slotwatch_common::services::LabelResolver;
use std::collections::HashMap;
use tracing::warn;

/// Labels from a static id → name map; unknown ids display as themselves.
#[derive(Debug, Clone, Default)]
pub struct MapLabelResolver {
    names: HashMap<String, String>,
}

impl MapLabelResolver {
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }

    /// Parses a JSON object such as `{"22": "Bethpage"}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }

    /// Like [`from_json`](Self::from_json) but falls back to an empty map, logging a
    /// warning when the JSON is invalid.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json {
            None => Self::default(),
            Some(json) => Self::from_json(json).unwrap_or_else(|err| {
                warn!("Ignoring LOCATION_NAMES, not a JSON object of strings: {}", err);
                Self::default()
            }),
        }
    }
}

impl LabelResolver for MapLabelResolver {
    fn resolve(&self, location_id: &str) -> String {
        self.names
            .get(location_id)
            .cloned()
            .unwrap_or_else(|| location_id.to_string())
    }
}
