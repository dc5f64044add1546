pub mod auth;
pub mod booking;
pub mod page;

pub use auth::{AuthReply, LoginRequest, RegisterRequest, UserProfile};
pub use booking::{AdminBooking, BookingRequest, HistoryEntry};
pub use page::Page;

use serde_json::{Map, Value};

/// Server-provided `message`, if it is a non-empty string
pub fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// First truthy value among `keys`, rendered as text.
/// Strings and numbers count; null, empty strings and absent keys are skipped.
pub(crate) fn first_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match fields.get(*key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    })
}
