//! # Mock Transport & Testing Guide
//!
//! [`MockTransport`] implements the same [`Transport`] seam as the
//! production [`HttpTransport`](crate::HttpTransport) but answers from a
//! list of expectations instead of a server. Consoles, navigators and whole
//! systems can be tested against it without opening a socket.
//!
//! ## When to use which
//!
//! | Feature | MockTransport | Channel transport | wiremock + HttpTransport |
//! |---------|---------------|-------------------|--------------------------|
//! | **Speed** | Instant | Instant | Real sockets |
//! | **Ordering control** | Delays per expectation | Full: you answer by hand | Server-side delays |
//! | **Use Case** | Screens and continuations | Races, in-flight behaviour | Headers, status codes, wire format |
//! | **Error Injection** | `return_err` / error bodies | Any | Error bodies |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Pattern 0: Fetcher Test (Pure Mock)</b></summary>
//!
//! ```rust
//! use mason_framework::mock::MockTransport;
//! use mason_framework::Fetcher;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Setup expectations
//!     let mock = MockTransport::new();
//!     mock.expect_get("/api/recipes/")
//!         .return_json(200, json!({"items": [{"name": "Chili"}]}));
//!
//!     // 2. Use the transport
//!     let fetcher = Fetcher::new(mock.shared());
//!     let doc = fetcher.fetch("/api/recipes/").await.unwrap();
//!     assert_eq!(doc.items()[0].text("name"), "Chili");
//!
//!     // 3. Every expectation was consumed, nothing unexpected was sent
//!     mock.verify();
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 1: Answering by hand</b></summary>
//!
//! When a test needs to decide *when* each response arrives (e.g. two
//! overlapping navigations), use [`create_mock_transport`]: every request
//! shows up on a receiver and waits until the test responds.
//!
//! ```rust
//! use mason_framework::mock::{create_mock_transport, expect_request, json_response};
//! use mason_framework::Fetcher;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (transport, mut requests) = create_mock_transport(4);
//!     let fetcher = Fetcher::new(Arc::new(transport));
//!
//!     let call = tokio::spawn(async move { fetcher.fetch("/api/drinks/").await });
//!
//!     let pending = expect_request(&mut requests).await.unwrap();
//!     assert_eq!(pending.request.href, "/api/drinks/");
//!     pending.respond(Ok(json_response(200, json!({"items": []}))));
//!
//!     assert!(call.await.unwrap().is_ok());
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 2: Full System Test</b></summary>
//!
//! Hand `mock.shared()` to the application's system constructor and drive
//! it through its client. See `tests/integration_test.rs` at the repository
//! root.
//! </details>

use crate::document::Method;
use crate::error::FrameworkError;
use crate::transport::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned answer for it.
struct Expectation {
    method: Method,
    href: String,
    delay: Option<Duration>,
    response: Result<HttpResponse, FrameworkError>,
}

#[derive(Default)]
struct MockState {
    expectations: Vec<Expectation>,
    received: Vec<HttpRequest>,
    unexpected: Vec<HttpRequest>,
}

/// A transport with expectation tracking for fluent testing.
///
/// Requests are matched against the first pending expectation with the same
/// method and href, so independent requests may arrive in any order. A
/// request nobody expected fails with `RequestFailed` and makes
/// [`MockTransport::verify`] panic.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// The same mock as a trait object, ready to be injected.
    pub fn shared(&self) -> Arc<dyn Transport> {
        Arc::new(self.clone())
    }

    /// Expects a request with the given verb and href.
    pub fn expect(&self, method: Method, href: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            state: self.state.clone(),
            method,
            href: href.into(),
            delay: None,
        }
    }

    /// Expects a GET.
    pub fn expect_get(&self, href: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Get, href)
    }

    /// Every request seen so far, expected or not, in arrival order.
    pub fn received(&self) -> Vec<HttpRequest> {
        lock(&self.state).received.clone()
    }

    /// Verifies that all expectations were met and nothing else was sent.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.unexpected.is_empty() {
            let requests: Vec<String> = state
                .unexpected
                .iter()
                .map(|request| format!("{} {}", request.method, request.href))
                .collect();
            panic!("Unexpected requests: {}", requests.join(", "));
        }
        if !state.expectations.is_empty() {
            let remaining: Vec<String> = state
                .expectations
                .iter()
                .map(|expectation| format!("{} {}", expectation.method, expectation.href))
                .collect();
            panic!(
                "Not all expectations were met. {} remaining: {}",
                remaining.len(),
                remaining.join(", ")
            );
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FrameworkError> {
        let matched = {
            let mut state = lock(&self.state);
            state.received.push(request.clone());
            let position = state
                .expectations
                .iter()
                .position(|e| e.method == request.method && e.href == request.href);
            match position {
                Some(index) => Some(state.expectations.remove(index)),
                None => {
                    state.unexpected.push(request.clone());
                    None
                }
            }
        };

        match matched {
            Some(expectation) => {
                if let Some(delay) = expectation.delay {
                    tokio::time::sleep(delay).await;
                }
                expectation.response
            }
            None => Err(FrameworkError::request_failed(
                None,
                format!("Unexpected request: {} {}", request.method, request.href),
            )),
        }
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder {
    state: Arc<Mutex<MockState>>,
    method: Method,
    href: String,
    delay: Option<Duration>,
}

impl ExpectationBuilder {
    /// Holds the response back for `delay` once the request arrives.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Answers with a JSON body.
    pub fn return_json(self, status: u16, body: Value) {
        self.return_response(json_response(status, body));
    }

    /// Answers `201 Created` with a `Location` header and no body.
    pub fn return_created(self, location: impl Into<String>) {
        self.return_response(HttpResponse {
            status: 201,
            location: Some(location.into()),
            body: Vec::new(),
        });
    }

    /// Answers `204 No Content`.
    pub fn return_no_content(self) {
        self.return_response(HttpResponse {
            status: 204,
            location: None,
            body: Vec::new(),
        });
    }

    pub fn return_response(self, response: HttpResponse) {
        self.push(Ok(response));
    }

    /// Fails the exchange itself, as a network error would.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<HttpResponse, FrameworkError>) {
        lock(&self.state).expectations.push(Expectation {
            method: self.method,
            href: self.href,
            delay: self.delay,
            response,
        });
    }
}

fn lock(state: &Mutex<MockState>) -> MutexGuard<'_, MockState> {
    // A panicking test thread must not hide the mock's own report.
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A response with a serialized JSON body.
pub fn json_response(status: u16, body: Value) -> HttpResponse {
    HttpResponse {
        status,
        location: None,
        body: body.to_string().into_bytes(),
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// A request parked until the test answers it.
#[derive(Debug)]
pub struct PendingRequest {
    pub request: HttpRequest,
    pub respond_to: oneshot::Sender<Result<HttpResponse, FrameworkError>>,
}

impl PendingRequest {
    pub fn respond(self, response: Result<HttpResponse, FrameworkError>) {
        let _ = self.respond_to.send(response);
    }
}

/// Transport half of [`create_mock_transport`].
#[derive(Clone)]
pub struct ChannelTransport {
    sender: mpsc::Sender<PendingRequest>,
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PendingRequest {
                request,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::request_failed(None, "Mock transport closed"))?;
        response
            .await
            .map_err(|_| FrameworkError::request_failed(None, "Mock request dropped"))?
    }
}

/// Creates a transport and a receiver for asserting requests.
///
/// # Testing Strategy
/// Each request sent through the transport arrives on `receiver` together
/// with a oneshot sender and blocks until the test responds. This gives the
/// test full control over which response lands first.
///
/// **Note**: Consider using [`MockTransport`] for a more fluent API.
pub fn create_mock_transport(buffer_size: usize) -> (ChannelTransport, mpsc::Receiver<PendingRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ChannelTransport { sender }, receiver)
}

/// Helper to wait for the next request.
pub async fn expect_request(receiver: &mut mpsc::Receiver<PendingRequest>) -> Option<PendingRequest> {
    receiver.recv().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_matches_by_method_and_href() {
        let mock = MockTransport::new();
        mock.expect(Method::Delete, "/api/drinks/Mojito/").return_no_content();
        mock.expect_get("/api/drinks/").return_json(200, json!({"items": []}));

        // Order of arrival differs from order of declaration.
        let listed = mock.send(HttpRequest::get("/api/drinks/")).await.unwrap();
        assert_eq!(listed.status, 200);
        let deleted = mock
            .send(HttpRequest::write("/api/drinks/Mojito/", Method::Delete, None))
            .await
            .unwrap();
        assert_eq!(deleted.status, 204);

        assert_eq!(mock.received().len(), 2);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected requests: GET /nowhere/")]
    async fn test_unexpected_request_fails_verify() {
        let mock = MockTransport::new();
        let result = mock.send(HttpRequest::get("/nowhere/")).await;
        assert!(result.is_err());
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_unmet_expectation_fails_verify() {
        let mock = MockTransport::new();
        mock.expect_get("/api/recipes/").return_json(200, json!({}));
        mock.verify();
    }

    #[tokio::test]
    async fn test_return_err() {
        let mock = MockTransport::new();
        mock.expect_get("/api/recipes/")
            .return_err(FrameworkError::request_failed(None, "connection refused"));
        let result = mock.send(HttpRequest::get("/api/recipes/")).await;
        assert_eq!(
            result,
            Err(FrameworkError::request_failed(None, "connection refused"))
        );
    }
}
