//! In-process [`Transport`] used by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

type Handler = dyn Fn(&HttpRequest) -> HttpResponse;

/// Answers every request with a closure and records what was sent.
///
/// Refresh calls yield to the executor before answering so concurrent
/// requests get a chance to observe the refresh in flight.
#[derive(Clone)]
pub struct MockTransport {
    handler: Rc<Handler>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new(handler: impl Fn(&HttpRequest) -> HttpResponse + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
            sent: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Respond 200 with `body` to every request.
    pub fn ok(body: &'static str) -> Self {
        Self::new(move |_| HttpResponse::new(200, body))
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.sent
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn count(&self, path_suffix: &str) -> usize {
        self.sent
            .borrow()
            .iter()
            .filter(|r| r.url.ends_with(path_suffix))
            .count()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.borrow_mut().push(request.clone());
        if request.url.ends_with("/api/auth/refresh") {
            for _ in 0..3 {
                tokio::task::yield_now().await;
            }
        }
        Ok((self.handler)(request))
    }
}
