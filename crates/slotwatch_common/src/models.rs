// --- File: crates/slotwatch_common/src/models.rs ---
//! Wire models of the reservation API's availability endpoint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// Duration assumed for a slot whose `Duration` is missing or zero.
pub const DEFAULT_SLOT_MINUTES: u32 = 15;

/// Availability for a single location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawAvailabilityResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub location_availability_dates: Vec<AvailabilityDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailabilityDate {
    /// e.g. "2025-09-17T00:00:00"
    pub availability_date: String,
    #[serde(default)]
    pub day_of_week: Option<String>,
    #[serde(default)]
    pub formatted_availability_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub available_time_slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeSlot {
    /// e.g. "2025-09-17T13:30:00"
    pub start_date_time: String,
    /// Minutes; the API sends a number, occasionally a numeric string
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub duration: Option<u32>,
}

impl TimeSlot {
    /// Slot length in minutes, falling back to [`DEFAULT_SLOT_MINUTES`].
    pub fn duration_minutes(&self) -> u32 {
        match self.duration {
            Some(d) if d > 0 => d,
            _ => DEFAULT_SLOT_MINUTES,
        }
    }
}

/// A list where `null` means empty and malformed items are dropped one by one.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                debug!("Skipping malformed item: {}", err);
                None
            }
        })
        .collect())
}

/// An unsigned number or a numeric string; anything else counts as absent.
fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let minutes = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_payload() {
        let body = r#"{
            "LocationAvailabilityDates": [
                {
                    "LocationId": 22,
                    "AvailabilityDate": "2025-09-17T00:00:00",
                    "DayOfWeek": "Wednesday",
                    "AvailableTimeSlots": [
                        {"LocationId": 22, "StartDateTime": "2025-09-17T13:30:00", "Duration": 15},
                        {"LocationId": 22, "StartDateTime": "2025-09-17T13:45:00"}
                    ]
                },
                {
                    "AvailabilityDate": "2025-09-18T00:00:00",
                    "DayOfWeek": "Thursday",
                    "AvailableTimeSlots": null
                }
            ]
        }"#;
        let resp: RawAvailabilityResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.location_availability_dates.len(), 2);
        let first = &resp.location_availability_dates[0];
        assert_eq!(first.day_of_week.as_deref(), Some("Wednesday"));
        assert_eq!(first.available_time_slots.len(), 2);
        assert_eq!(first.available_time_slots[0].duration_minutes(), 15);
        assert_eq!(first.available_time_slots[1].duration_minutes(), DEFAULT_SLOT_MINUTES);
        assert!(resp.location_availability_dates[1].available_time_slots.is_empty());
    }

    #[test]
    fn test_missing_or_null_dates_is_empty() {
        let resp: RawAvailabilityResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.location_availability_dates.is_empty());
        let resp: RawAvailabilityResponse =
            serde_json::from_str(r#"{"LocationAvailabilityDates": null}"#).unwrap();
        assert!(resp.location_availability_dates.is_empty());
    }

    #[test]
    fn test_malformed_items_are_skipped_individually() {
        let body = r#"{
            "LocationAvailabilityDates": [
                {
                    "AvailabilityDate": "2025-09-16T00:00:00",
                    "DayOfWeek": "Tuesday",
                    "AvailableTimeSlots": [
                        {"StartDateTime": null, "Duration": 15},
                        {"StartDateTime": "2025-09-16T09:00:00", "Duration": 15}
                    ]
                },
                {"AvailabilityDate": null, "AvailableTimeSlots": []},
                null
            ]
        }"#;
        let resp: RawAvailabilityResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.location_availability_dates.len(), 1);
        let day = &resp.location_availability_dates[0];
        assert_eq!(day.availability_date, "2025-09-16T00:00:00");
        assert_eq!(day.available_time_slots.len(), 1);
        assert_eq!(day.available_time_slots[0].start_date_time, "2025-09-16T09:00:00");
    }

    #[test]
    fn test_duration_accepts_numeric_strings() {
        let slots: Vec<TimeSlot> = serde_json::from_str(
            r#"[
                {"StartDateTime": "2025-09-16T09:00:00", "Duration": "30"},
                {"StartDateTime": "2025-09-16T09:30:00", "Duration": "soon"},
                {"StartDateTime": "2025-09-16T10:00:00", "Duration": -5},
                {"StartDateTime": "2025-09-16T10:15:00", "Duration": null}
            ]"#,
        )
        .unwrap();
        let minutes: Vec<u32> = slots.iter().map(TimeSlot::duration_minutes).collect();
        assert_eq!(minutes, vec![30, DEFAULT_SLOT_MINUTES, DEFAULT_SLOT_MINUTES, DEFAULT_SLOT_MINUTES]);
        assert_eq!(slots[0].duration, Some(30));
        assert_eq!(slots[1].duration, None);
    }

    #[test]
    fn test_zero_duration_uses_default() {
        let slot = TimeSlot {
            start_date_time: "2025-09-17T09:00:00".to_string(),
            duration: Some(0),
        };
        assert_eq!(slot.duration_minutes(), DEFAULT_SLOT_MINUTES);
    }
}
