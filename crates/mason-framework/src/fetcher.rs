//! # Resource Fetcher
//!
//! Turns raw exchanges into hypermedia results:
//!
//! - [`Fetcher::fetch`] GETs a document.
//! - [`Fetcher::submit`] sends a JSON body with a write verb and exposes the
//!   `Location` header of the result.
//!
//! Both report every failure the same way, as
//! [`FrameworkError::RequestFailed`] carrying the server's `@error.@message`.
//! Bodies without that shape fall back to a generic message instead of
//! failing a second time.

use crate::document::{Document, MasonError, Method};
use crate::error::FrameworkError;
use crate::transport::{HttpRequest, HttpResponse, Transport};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Result of a successful write.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub status: u16,
    /// Where the created resource lives, when the server says so.
    pub location: Option<String>,
    /// Response document, if the server sent one.
    pub body: Option<Document>,
}

/// What a completed navigation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Fetched(Document),
    Submitted(Submission),
}

/// Cheap to clone; every clone shares the transport.
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn Transport>,
}

impl Fetcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    #[instrument(skip(self))]
    pub async fn fetch(&self, href: &str) -> Result<Document, FrameworkError> {
        let response = self.transport.send(HttpRequest::get(href)).await?;
        let response = ensure_success(response)?;
        Document::from_slice(&response.body)
    }

    #[instrument(skip(self, payload))]
    pub async fn submit(
        &self,
        href: &str,
        method: Method,
        payload: Option<Value>,
    ) -> Result<Submission, FrameworkError> {
        debug!(?payload, "Submitting");
        let response = self
            .transport
            .send(HttpRequest::write(href, method, payload))
            .await?;
        let response = ensure_success(response)?;

        let body = if response.body.is_empty() {
            None
        } else {
            Document::from_slice(&response.body).ok()
        };
        Ok(Submission {
            status: response.status,
            location: response.location,
            body,
        })
    }

    /// GET becomes a fetch, every other verb a submit.
    pub async fn perform(
        &self,
        href: &str,
        method: Method,
        payload: Option<Value>,
    ) -> Result<Outcome, FrameworkError> {
        match method {
            Method::Get => self.fetch(href).await.map(Outcome::Fetched),
            _ => self
                .submit(href, method, payload)
                .await
                .map(Outcome::Submitted),
        }
    }
}

fn ensure_success(response: HttpResponse) -> Result<HttpResponse, FrameworkError> {
    if response.is_success() {
        return Ok(response);
    }
    let message = error_message(&response);
    warn!(status = response.status, %message, "Request failed");
    Err(FrameworkError::request_failed(Some(response.status), message))
}

/// `@error.@message` of a failure body, or a generic text.
pub fn error_message(response: &HttpResponse) -> String {
    MasonError::from_slice(&response.body)
        .map(|error| error.message)
        .unwrap_or_else(|| format!("Request failed with status {}", response.status))
}
