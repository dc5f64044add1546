// ============================================================================
// SESSION STORE - token + user profile over a pluggable key-value backend
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;
use crate::models::UserProfile;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "user";

const TOKEN_LOG_PREFIX: usize = 20;

/// String key-value storage (browser localStorage, or memory)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory backend for tests and hosts without localStorage
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Session persisted under `authToken` and `user`.
///
/// Token and user are written together by convention only; readers must
/// cope with one being present without the other.
pub struct SessionStore<S> {
    backend: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn set_auth(&self, token: &str) {
        match self.backend.set(AUTH_TOKEN_KEY, token) {
            Ok(()) => {
                let prefix: String = token.chars().take(TOKEN_LOG_PREFIX).collect();
                log::debug!("💾 [SESSION] Token stored: {}...", prefix);
            }
            Err(e) => log::warn!("⚠️ [SESSION] Could not store token: {}", e),
        }
    }

    pub fn get_auth(&self) -> Option<String> {
        self.backend.get(AUTH_TOKEN_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_auth().is_some_and(|t| !t.is_empty())
    }

    pub fn set_user(&self, user: &UserProfile) {
        let json = match serde_json::to_string(user) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("⚠️ [SESSION] Could not serialize user: {}", e);
                return;
            }
        };
        match self.backend.set(USER_KEY, &json) {
            Ok(()) => log::debug!("💾 [SESSION] User stored: {:?}", user.display_name()),
            Err(e) => log::warn!("⚠️ [SESSION] Could not store user: {}", e),
        }
    }

    /// Stored profile; malformed JSON reads as absent
    pub fn get_user(&self) -> Option<UserProfile> {
        let json = self.backend.get(USER_KEY)?;
        match serde_json::from_str::<Option<UserProfile>>(&json) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("⚠️ [SESSION] Ignoring malformed stored user: {}", e);
                None
            }
        }
    }

    pub fn clear_auth(&self) {
        for key in [AUTH_TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.backend.remove(key) {
                log::warn!("⚠️ [SESSION] Could not remove {}: {}", key, e);
            }
        }
        log::info!("🚪 [SESSION] Auth cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore<MemoryStore> {
        SessionStore::new(MemoryStore::new())
    }

    #[test]
    fn test_token_round_trip() {
        let session = store();
        assert_eq!(session.get_auth(), None);

        session.set_auth("x");
        assert_eq!(session.get_auth().as_deref(), Some("x"));
        assert!(session.is_authenticated());

        session.clear_auth();
        assert_eq!(session.get_auth(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clear_removes_user_too() {
        let session = store();
        session.set_auth("x");
        session.set_user(&UserProfile::with_email("a@b.com"));

        session.clear_auth();
        assert_eq!(session.get_user(), None);
        assert_eq!(session.backend().get(USER_KEY), None);
    }

    #[test]
    fn test_user_stored_as_json() {
        let session = store();
        session.set_user(&UserProfile::with_email("a@b.com"));
        assert_eq!(
            session.backend().get(USER_KEY).as_deref(),
            Some(r#"{"email":"a@b.com"}"#)
        );
        assert_eq!(session.get_user(), Some(UserProfile::with_email("a@b.com")));
    }

    #[test]
    fn test_malformed_user_reads_as_absent() {
        let session = store();
        session.backend().set(USER_KEY, "{not json").unwrap();
        assert_eq!(session.get_user(), None);

        session.backend().set(USER_KEY, "null").unwrap();
        assert_eq!(session.get_user(), None);

        session.backend().set(USER_KEY, "[1, 2]").unwrap();
        assert_eq!(session.get_user(), None);
    }

    #[test]
    fn test_token_without_user_is_tolerated() {
        let session = store();
        session.set_auth("x");
        assert!(session.is_authenticated());
        assert_eq!(session.get_user(), None);
    }

    #[test]
    fn test_token_stored_raw() {
        let session = store();
        session.set_auth("abc.def.ghi");
        assert_eq!(session.backend().get(AUTH_TOKEN_KEY).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_user_written_by_other_pages_is_read_leniently() {
        let session = store();
        session.backend().set(USER_KEY, r#"{"name":"Asha","phone":5550101}"#).unwrap();

        let user = session.get_user().unwrap();
        assert_eq!(user.name().as_deref(), Some("Asha"));
        assert_eq!(user.phone().as_deref(), Some("5550101"));
    }
}
