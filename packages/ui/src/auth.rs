//! Session context and hooks for the UI.

use api::SessionEvent;
use dioxus::prelude::*;
use futures::StreamExt;
use store::{ConsoleConfig, NotificationKind, Role, Session, SessionStore};

use crate::backend::{make_backend, make_storage, use_backend};
use crate::notifications::{notify, use_notifications};

/// Who is signed in, if anyone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The configuration the console was started with.
pub fn use_config() -> ConsoleConfig {
    use_context::<ConsoleConfig>()
}

/// Provides the backend, the configuration and the session signal.
///
/// The session is restored from storage on mount and written back whenever
/// it changes. When the API layer clears the credentials (failed refresh or
/// logout) the session is reset, which sends guarded pages to `/login`.
/// Must be rendered inside a [`crate::NotificationProvider`].
#[component]
pub fn AuthProvider(config: ConsoleConfig, children: Element) -> Element {
    let storage = use_hook(make_storage);
    let session_store = use_hook(|| SessionStore::new(storage.clone(), &config.storage));
    let backend = use_context_provider(|| make_backend(&config, storage.clone()));
    use_context_provider(|| config.clone());

    let mut auth_state = use_context_provider(|| {
        // A session without tokens cannot make a single request.
        let session = session_store
            .load()
            .filter(|_| backend.credentials().is_authenticated());
        Signal::new(AuthState { session })
    });

    // Persist every change of the session
    let store_for_effect = session_store.clone();
    use_effect(move || match auth_state().session {
        Some(ref session) => store_for_effect.save(session),
        None => store_for_effect.clear(),
    });

    // Reset on the logout signal
    let mut notifications = use_notifications();
    let _listener = use_future(move || {
        let mut events = backend.credentials().subscribe();
        async move {
            while let Some(event) = events.next().await {
                tracing::info!(?event, "Credentials cleared, resetting session");
                if event == SessionEvent::Expired && auth_state.peek().is_authenticated() {
                    notify(
                        &mut notifications,
                        NotificationKind::Warning,
                        "Your session has expired. Please sign in again.",
                    );
                }
                auth_state.set(AuthState::default());
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let backend = use_backend();
    let mut auth_state = use_auth();
    let nav = use_navigator();

    let onclick = move |_| {
        backend.logout();
        auth_state.set(AuthState::default());
        nav.replace("/login");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

