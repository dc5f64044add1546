use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::first_text;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

/// Profile kept next to the token, stored exactly as the server sent it.
/// `name`, `email` and `phone` are read leniently: numbers render as text,
/// objects, arrays and null read as missing.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(transparent)]
pub struct UserProfile(Map<String, Value>);

impl UserProfile {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn with_email(email: &str) -> Self {
        Self::default().with("email", email)
    }

    pub fn from_registration(request: &RegisterRequest) -> Self {
        Self::default()
            .with("name", &request.name)
            .with("email", &request.email)
            .with("phone", &request.phone)
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    pub fn name(&self) -> Option<String> {
        first_text(&self.0, &["name"])
    }

    pub fn email(&self) -> Option<String> {
        first_text(&self.0, &["email"])
    }

    pub fn phone(&self) -> Option<String> {
        first_text(&self.0, &["phone"])
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Name if set, otherwise email
    pub fn display_name(&self) -> Option<String> {
        self.name().or_else(|| self.email())
    }
}

/// What we care about in a `/login/` or `/register/` body
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthReply {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl AuthReply {
    pub fn from_body(body: &Value) -> Self {
        let token = body
            .get("token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let user = match body.get("user") {
            Some(Value::Object(fields)) => Some(UserProfile::from_fields(fields.clone())),
            Some(other) if !other.is_null() => {
                log::warn!("⚠️ [AUTH] Ignoring non-object user: {}", other);
                None
            }
            _ => None,
        };

        Self { token, user }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_keeps_unknown_fields() {
        let raw = json!({"email": "a@b.com", "id": 7, "is_staff": true});
        let profile: UserProfile = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(profile.email().as_deref(), Some("a@b.com"));
        assert_eq!(profile.fields().get("id"), Some(&json!(7)));
        assert_eq!(serde_json::to_value(&profile).unwrap(), raw);
    }

    #[test]
    fn test_profile_serializes_only_present_fields() {
        let profile = UserProfile::with_email("a@b.com");
        assert_eq!(serde_json::to_value(&profile).unwrap(), json!({"email": "a@b.com"}));
    }

    #[test]
    fn test_display_name_prefers_name() {
        let profile = UserProfile::with_email("a@b.com");
        assert_eq!(profile.display_name().as_deref(), Some("a@b.com"));
        let profile = profile.with("name", "Asha");
        assert_eq!(profile.display_name().as_deref(), Some("Asha"));
        let profile = profile.with("name", "");
        assert_eq!(profile.display_name().as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_auth_reply_requires_non_empty_token() {
        assert_eq!(AuthReply::from_body(&json!({"token": ""})).token, None);
        assert_eq!(AuthReply::from_body(&json!({"token": null})).token, None);
        assert_eq!(AuthReply::from_body(&json!({"token": "t"})).token.as_deref(), Some("t"));
    }

    #[test]
    fn test_auth_reply_ignores_non_object_user() {
        let reply = AuthReply::from_body(&json!({"token": "t", "user": "someone"}));
        assert_eq!(reply.user, None);
    }

    #[test]
    fn test_numeric_fields_read_as_text() {
        let raw = json!({"id": 4, "name": "Asha", "email": "a@b.com", "phone": 5550101});
        let reply = AuthReply::from_body(&json!({"token": "t", "user": raw.clone()}));

        let user = reply.user.unwrap();
        assert_eq!(user.phone().as_deref(), Some("5550101"));
        assert_eq!(user.name().as_deref(), Some("Asha"));
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn test_unexpected_field_types_read_as_missing() {
        let user: UserProfile = serde_json::from_value(json!({"name": {"first": "Asha"}, "email": null})).unwrap();
        assert_eq!(user.name(), None);
        assert_eq!(user.email(), None);
        assert_eq!(user.display_name(), None);
    }
}
