//! # Shared credentials and the token refresh coordinator
//!
//! Both backend clients hold a clone of the same [`Credentials`], so the
//! bearer they attach, the refresh they trigger and the logout signal they
//! emit are shared.
//!
//! ## Single-flight refresh
//!
//! The first request to see a 401 marks a refresh as in flight and performs
//! `POST /api/auth/refresh`. Any request that sees a 401 while that call is
//! pending parks a oneshot receiver in the waiter queue instead of issuing
//! its own call. When the refresh settles, every waiter receives either the
//! new token or a rejection, and the queue is emptied. If the refreshing
//! request is dropped first, a waiter takes over and refreshes itself.
//!
//! ## Logout signal
//!
//! [`Credentials::subscribe`] hands out a channel of [`SessionEvent`]s. A
//! failed refresh clears the stored tokens and sends
//! [`SessionEvent::Expired`]; an explicit logout sends
//! [`SessionEvent::LoggedOut`]. The UI session store listens and resets
//! itself, so the client never needs to know about the store.
//!
//! The console runs on a single-threaded event loop, so the shared state is
//! `Rc<RefCell<_>>`. Borrows are never held across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::{mpsc, oneshot};
use serde_json::json;
use store::{AuthResponse, KeyValueStore, TokenStore};

use crate::error::ApiError;
use crate::transport::{HttpRequest, Method, Transport};

/// Emitted on every subscriber channel when the credentials are cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The refresh token was missing or rejected.
    Expired,
    /// The user signed out.
    LoggedOut,
}

type Waiter = oneshot::Sender<Option<String>>;

#[derive(Default)]
struct RefreshState {
    in_flight: bool,
    waiters: Vec<Waiter>,
}

struct Inner<S> {
    tokens: TokenStore<S>,
    refresh: RefCell<RefreshState>,
    listeners: RefCell<Vec<mpsc::UnboundedSender<SessionEvent>>>,
}

pub struct Credentials<S> {
    inner: Rc<Inner<S>>,
}

impl<S> Clone for Credentials<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore> Credentials<S> {
    pub fn new(tokens: TokenStore<S>) -> Self {
        Self {
            inner: Rc::new(Inner {
                tokens,
                refresh: RefCell::new(RefreshState::default()),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner.tokens.access_token()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.inner.tokens.refresh_token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.tokens.is_authenticated()
    }

    pub fn store(&self, access_token: &str, refresh_token: Option<&str>) {
        self.inner.tokens.set(access_token, refresh_token);
    }

    /// Receive a [`SessionEvent`] every time the credentials are cleared.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded();
        self.inner.listeners.borrow_mut().push(tx);
        rx
    }

    /// Remove both tokens and notify subscribers. Closed channels are pruned.
    pub fn clear(&self, event: SessionEvent) {
        self.inner.tokens.clear();
        self.inner
            .listeners
            .borrow_mut()
            .retain(|tx| tx.unbounded_send(event).is_ok());
    }

    pub fn is_refreshing(&self) -> bool {
        self.inner.refresh.borrow().in_flight
    }

    /// Obtain a fresh access token, joining a refresh already in flight.
    ///
    /// If the refresh being waited on is dropped before it settles, one of
    /// the waiters starts the next one and the rest queue behind it.
    ///
    /// On failure the credentials have been cleared and
    /// [`SessionEvent::Expired`] has been sent.
    pub async fn refresh<T: Transport>(
        &self,
        transport: &T,
        refresh_url: &str,
    ) -> Result<String, ApiError> {
        loop {
            let waiter = {
                let mut state = self.inner.refresh.borrow_mut();
                if state.in_flight {
                    let (tx, rx) = oneshot::channel();
                    state.waiters.push(tx);
                    Some(rx)
                } else {
                    state.in_flight = true;
                    None
                }
            };

            let Some(rx) = waiter else {
                return self.lead_refresh(transport, refresh_url).await;
            };

            tracing::debug!("Refresh already in flight, waiting for new token");
            let seen = self.access_token();
            match rx.await {
                Ok(Some(token)) => return Ok(token),
                Ok(None) => return Err(ApiError::SessionExpired),
                Err(_) => match self.access_token() {
                    Some(current) if Some(&current) != seen.as_ref() => return Ok(current),
                    _ => tracing::debug!("Refresh was cancelled, taking over"),
                },
            }
        }
    }

    async fn lead_refresh<T: Transport>(
        &self,
        transport: &T,
        refresh_url: &str,
    ) -> Result<String, ApiError> {
        let guard = InFlight {
            credentials: self,
            settled: false,
        };
        let outcome = self.request_new_token(transport, refresh_url).await;
        let waiters = guard.settle();

        match outcome {
            Ok(token) => {
                tracing::info!(queued = waiters.len(), "Access token refreshed");
                for waiter in waiters {
                    let _ = waiter.send(Some(token.clone()));
                }
                Ok(token)
            }
            Err(err) => {
                for waiter in waiters {
                    let _ = waiter.send(None);
                }
                self.clear(SessionEvent::Expired);
                Err(err)
            }
        }
    }

    async fn request_new_token<T: Transport>(
        &self,
        transport: &T,
        refresh_url: &str,
    ) -> Result<String, ApiError> {
        let Some(refresh_token) = self.refresh_token() else {
            tracing::warn!("No refresh token stored, ending session");
            return Err(ApiError::SessionExpired);
        };

        let request = HttpRequest::new(Method::POST, refresh_url)
            .json(json!({ "refreshToken": refresh_token }));
        let response = match transport.send(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Token refresh failed: {}", e);
                return Err(ApiError::SessionExpired);
            }
        };
        if !response.is_success() {
            tracing::error!(status = response.status, "Token refresh rejected");
            return Err(ApiError::SessionExpired);
        }

        let body: AuthResponse = response.json().map_err(|e| {
            tracing::error!("Token refresh returned an unreadable body: {}", e);
            ApiError::SessionExpired
        })?;
        let Some(token) = body.bearer() else {
            tracing::error!("Token refresh response carried no token");
            return Err(ApiError::SessionExpired);
        };

        self.store(token, body.refresh_token.as_deref());
        Ok(token.to_string())
    }
}

/// Resets the in-flight flag if the refreshing future is dropped before it
/// settles, so parked waiters are released instead of hanging.
struct InFlight<'a, S> {
    credentials: &'a Credentials<S>,
    settled: bool,
}

impl<S> InFlight<'_, S> {
    fn settle(mut self) -> Vec<Waiter> {
        self.settled = true;
        self.take_waiters()
    }

    fn take_waiters(&self) -> Vec<Waiter> {
        let mut state = self.credentials.inner.refresh.borrow_mut();
        state.in_flight = false;
        std::mem::take(&mut state.waiters)
    }
}

impl<S> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        if !self.settled {
            // Dropping the senders cancels every parked receiver.
            drop(self.take_waiters());
        }
    }
}
