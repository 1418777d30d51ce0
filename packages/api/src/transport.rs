//! # HTTP transport
//!
//! [`Transport`] is the seam between the refresh-aware [`crate::ApiClient`]
//! and the network. Production code uses [`ReqwestTransport`]; tests drive
//! the client through an in-process mock.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub use reqwest::Method;

/// A fully resolved request: absolute URL, optional JSON body and bearer.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            bearer: None,
        }
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Async interface for sending one HTTP request.
pub trait Transport {
    fn send(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}

/// [`Transport`] over `reqwest`, with a fixed per-request timeout.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        #[cfg(target_arch = "wasm32")]
        let client = reqwest::Client::new();

        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        // The browser fetch API has no client-level timeout.
        #[cfg(target_arch = "wasm32")]
        let response = with_timeout(builder.send(), self.timeout).await??;
        #[cfg(not(target_arch = "wasm32"))]
        let response = builder.send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(target_arch = "wasm32")]
async fn with_timeout<F: Future>(fut: F, timeout: Duration) -> Result<F::Output, ApiError> {
    use futures::future::{select, Either};

    let sleep = gloo_timers::future::sleep(timeout);
    futures::pin_mut!(fut);
    futures::pin_mut!(sleep);
    match select(fut, sleep).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(ApiError::Timeout),
    }
}
