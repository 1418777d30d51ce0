//! Platform-specific construction of the backend clients.

use api::{Backend, ReqwestTransport};
use dioxus::prelude::*;
use store::ConsoleConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// The backend pair as wired up in the running console.
pub type ConsoleBackend = Backend<ReqwestTransport, PlatformStore>;

/// Token and session storage for the current platform: `localStorage` in the
/// browser, an in-memory map elsewhere.
pub fn make_storage() -> PlatformStore {
    PlatformStore::new()
}

/// Both backend clients over `storage`, which also holds the session record.
pub fn make_backend(config: &ConsoleConfig, storage: PlatformStore) -> ConsoleBackend {
    Backend::connect(config, storage)
}

/// The backend provided by [`crate::AuthProvider`].
pub fn use_backend() -> ConsoleBackend {
    use_context::<ConsoleBackend>()
}
