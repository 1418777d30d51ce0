//! Persisted session record.
//!
//! The [`Session`] is stored as JSON under [`StorageConfig::session_key`] so a
//! reload lands the user back on the console instead of the login page.

use crate::config::StorageConfig;
use crate::models::Session;
use crate::storage::KeyValueStore;

#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S, config: &StorageConfig) -> Self {
        Self {
            storage,
            key: config.session_key.clone(),
        }
    }

    /// The stored session, or `None` when absent or unreadable.
    pub fn load(&self) -> Option<Session> {
        let raw = self.storage.get(&self.key)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn save(&self, session: &Session) {
        if let Ok(raw) = serde_json::to_string(session) {
            self.storage.set(&self.key, &raw);
        }
    }

    pub fn clear(&self) {
        self.storage.remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::MemoryStore;

    fn session() -> Session {
        Session {
            user_id: "42".to_string(),
            full_name: "Grace Hopper".to_string(),
            email: "grace@uni.edu".to_string(),
            role: Role::Examiner,
            access_token: "access".to_string(),
            refresh_token: Some("refresh".to_string()),
        }
    }

    #[test]
    fn test_session_survives_reload() {
        let storage = MemoryStore::new();
        let config = StorageConfig::default();
        SessionStore::new(storage.clone(), &config).save(&session());

        // A fresh store over the same storage sees the session.
        let reloaded = SessionStore::new(storage, &config);
        assert_eq!(reloaded.load(), Some(session()));
    }

    #[test]
    fn test_corrupt_session_loads_as_none() {
        let storage = MemoryStore::new();
        let config = StorageConfig::default();
        storage.set(&config.session_key, "{not json");
        assert!(SessionStore::new(storage, &config).load().is_none());
    }

    #[test]
    fn test_clear() {
        let store = SessionStore::new(MemoryStore::new(), &StorageConfig::default());
        store.save(&session());
        store.clear();
        assert!(store.load().is_none());
    }
}
