//! Access and refresh token persistence.

use crate::config::StorageConfig;
use crate::storage::KeyValueStore;

/// The bearer and refresh tokens, stored under configurable keys.
#[derive(Clone, Debug)]
pub struct TokenStore<S> {
    storage: S,
    token_key: String,
    refresh_token_key: String,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(storage: S, config: &StorageConfig) -> Self {
        Self {
            storage,
            token_key: config.token_key.clone(),
            refresh_token_key: config.refresh_token_key.clone(),
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage.get(&self.token_key).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.storage
            .get(&self.refresh_token_key)
            .filter(|t| !t.is_empty())
    }

    /// Store a new access token. A previously stored refresh token is kept
    /// when `refresh_token` is `None`.
    pub fn set(&self, access_token: &str, refresh_token: Option<&str>) {
        self.storage.set(&self.token_key, access_token);
        if let Some(refresh) = refresh_token {
            self.storage.set(&self.refresh_token_key, refresh);
        }
    }

    pub fn clear(&self) {
        self.storage.remove(&self.token_key);
        self.storage.remove(&self.refresh_token_key);
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_tokens_use_configured_keys() {
        let storage = MemoryStore::new();
        let config = StorageConfig {
            token_key: "jwt".to_string(),
            refresh_token_key: "jwt_refresh".to_string(),
            ..StorageConfig::default()
        };
        let tokens = TokenStore::new(storage.clone(), &config);

        tokens.set("access", Some("refresh"));
        assert_eq!(storage.get("jwt").as_deref(), Some("access"));
        assert_eq!(storage.get("jwt_refresh").as_deref(), Some("refresh"));
        assert!(tokens.is_authenticated());
    }

    #[test]
    fn test_set_without_refresh_keeps_previous() {
        let tokens = TokenStore::new(MemoryStore::new(), &StorageConfig::default());
        tokens.set("first", Some("r1"));
        tokens.set("second", None);
        assert_eq!(tokens.access_token().as_deref(), Some("second"));
        assert_eq!(tokens.refresh_token().as_deref(), Some("r1"));
    }

    #[test]
    fn test_clear_removes_both() {
        let tokens = TokenStore::new(MemoryStore::new(), &StorageConfig::default());
        tokens.set("a", Some("r"));
        tokens.clear();
        assert!(tokens.access_token().is_none());
        assert!(tokens.refresh_token().is_none());
        assert!(!tokens.is_authenticated());
    }
}
