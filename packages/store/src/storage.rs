//! # Key/value storage for client-persisted state
//!
//! Tokens and the session survive page reloads by living in a string-keyed
//! store. [`KeyValueStore`] abstracts over where that store lives:
//!
//! | Implementation | Platform |
//! |----------------|----------|
//! | [`crate::MemoryStore`] | native builds and tests |
//! | `LocalStore` | browser `localStorage` (`web` feature on wasm32) |
//!
//! Implementations swallow their own failures: a read that cannot be served
//! is `None`, a write that cannot be performed is dropped. A broken storage
//! therefore looks like a fresh browser profile rather than an error.

/// Synchronous string storage keyed by name.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

