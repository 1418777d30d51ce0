//! # Authenticated HTTP client
//!
//! One [`ApiClient`] exists per backend. Every request carries the current
//! bearer token. A 401 is answered by refreshing the token through the shared
//! [`Credentials`] and replaying the request exactly once; the replay's
//! outcome is final.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::config::join_url;
use store::KeyValueStore;

use crate::credentials::Credentials;
use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

pub struct ApiClient<T, S> {
    base_url: String,
    refresh_url: String,
    transport: T,
    credentials: Credentials<S>,
}

impl<T: Clone, S> Clone for ApiClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            refresh_url: self.refresh_url.clone(),
            transport: self.transport.clone(),
            credentials: self.credentials.clone(),
        }
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(
        base_url: impl Into<String>,
        refresh_url: impl Into<String>,
        transport: T,
        credentials: Credentials<S>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            refresh_url: refresh_url.into(),
            transport,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials<S> {
        &self.credentials
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(Method::GET, path, None).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.send(Method::POST, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn patch<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.send(Method::PATCH, path, Some(serde_json::to_value(body)?))
            .await
    }

    /// PATCH without a request body.
    pub async fn patch_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(Method::PATCH, path, None).await
    }

    pub async fn send<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<R, ApiError> {
        self.execute(method, path, body).await?.json()
    }

    /// Send a request, refreshing and replaying once on 401.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse, ApiError> {
        let sent_token = self.credentials.access_token();
        let mut request = HttpRequest::new(method, join_url(&self.base_url, path))
            .bearer(sent_token.clone());
        request.body = body;

        tracing::debug!(method = %request.method, url = %request.url, "Sending request");
        let response = self.transport.send(&request).await?;
        if response.status != 401 {
            return check_status(response);
        }

        // Anonymous calls (login with a bad password) have nothing to refresh.
        let Some(sent_token) = sent_token else {
            return Err(ApiError::Unauthorized);
        };

        // Another request may already have replaced the token we sent.
        let token = match self.credentials.access_token() {
            Some(current) if current != sent_token => current,
            _ => {
                self.credentials
                    .refresh(&self.transport, &self.refresh_url)
                    .await?
            }
        };

        tracing::debug!(url = %request.url, "Replaying request with refreshed token");
        let replay = request.bearer(Some(token));
        let response = self.transport.send(&replay).await?;
        if response.status == 401 {
            return Err(ApiError::Unauthorized);
        }
        check_status(response)
    }
}

fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::from_status(response.status, &response.body))
    }
}
