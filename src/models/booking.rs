use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::first_text;

const DATE_KEYS: &[&str] = &["date", "serviceDate", "created_at"];
const SERVICE_KEYS: &[&str] = &["serviceType", "service_type"];
const BIKE_KEYS: &[&str] = &["bikeModel", "bike_model"];
const DEFAULT_STATUS: &str = "pending";

/// Payload for `POST /bookings/`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bike_model: String,
    pub service_type: String,
    pub service_date: String,
    pub service_time: String,
    pub notes: String,
}

/// One row of `/user/history/`. The backend owns the schema, so we only read
/// through fallback chains.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct HistoryEntry {
    fields: Map<String, Value>,
}

impl HistoryEntry {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    pub fn date(&self) -> Option<String> {
        first_text(&self.fields, DATE_KEYS)
    }

    pub fn service_type(&self) -> Option<String> {
        first_text(&self.fields, SERVICE_KEYS)
    }

    pub fn bike_model(&self) -> Option<String> {
        first_text(&self.fields, BIKE_KEYS)
    }

    pub fn status(&self) -> String {
        first_text(&self.fields, &["status"]).unwrap_or_else(|| DEFAULT_STATUS.to_string())
    }

    /// `<date> - <service> - <bike> (<status>)`
    pub fn summary(&self) -> String {
        format!(
            "{} - {} - {} ({})",
            self.date().unwrap_or_default(),
            self.service_type().unwrap_or_default(),
            self.bike_model().unwrap_or_default(),
            self.status()
        )
    }
}

/// One row of the admin `/bookings/` listing
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AdminBooking {
    fields: Map<String, Value>,
}

impl AdminBooking {
    pub const COLUMNS: [&'static str; 7] =
        ["ID", "Name", "Email", "Phone", "Bike Model", "Service", "Date"];

    const KEYS: [&'static str; 7] =
        ["id", "name", "email", "phone", "bikeModel", "serviceType", "serviceDate"];

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Cell texts in `COLUMNS` order, empty where the backend left a gap
    pub fn cells(&self) -> Vec<String> {
        Self::KEYS
            .iter()
            .map(|key| first_text(&self.fields, &[key]).unwrap_or_default())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_request_uses_camel_case_keys() {
        let request = BookingRequest {
            name: "Asha".into(),
            email: "a@b.com".into(),
            phone: "555".into(),
            bike_model: "Classic 350".into(),
            service_type: "General".into(),
            service_date: "2024-05-01".into(),
            service_time: "10:00".into(),
            notes: String::new(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["bikeModel"], "Classic 350");
        assert_eq!(value["serviceType"], "General");
        assert_eq!(value["serviceDate"], "2024-05-01");
        assert_eq!(value["serviceTime"], "10:00");
        assert_eq!(value["notes"], "");
    }

    #[test]
    fn test_history_date_fallback_order() {
        let entry = HistoryEntry::from_value(json!({
            "serviceDate": "2024-05-01",
            "created_at": "2024-04-20T09:00:00Z"
        }));
        assert_eq!(entry.date().as_deref(), Some("2024-05-01"));

        let entry = HistoryEntry::from_value(json!({
            "date": "2024-06-01",
            "serviceDate": "2024-05-01"
        }));
        assert_eq!(entry.date().as_deref(), Some("2024-06-01"));

        let entry = HistoryEntry::from_value(json!({"created_at": "2024-04-20"}));
        assert_eq!(entry.date().as_deref(), Some("2024-04-20"));
    }

    #[test]
    fn test_history_summary_defaults_status() {
        let entry = HistoryEntry::from_value(json!({
            "serviceDate": "2024-05-01",
            "serviceType": "Oil change",
            "bikeModel": "Meteor"
        }));
        assert_eq!(entry.summary(), "2024-05-01 - Oil change - Meteor (pending)");
    }

    #[test]
    fn test_history_snake_case_fallbacks() {
        let entry = HistoryEntry::from_value(json!({
            "created_at": "2024-04-20",
            "service_type": "Brakes",
            "bike_model": "Himalayan",
            "status": "completed"
        }));
        assert_eq!(entry.summary(), "2024-04-20 - Brakes - Himalayan (completed)");
    }

    #[test]
    fn test_admin_cells_fill_gaps() {
        let booking = AdminBooking::from_value(json!({
            "id": 3,
            "name": "Asha",
            "email": null,
            "bikeModel": "Classic 350"
        }));
        assert_eq!(
            booking.cells(),
            vec!["3", "Asha", "", "", "Classic 350", "", ""]
        );
    }
}
