//! # Transport
//!
//! The network seam. [`Fetcher`](crate::Fetcher) and the navigator only ever
//! talk to a `dyn Transport`; production wiring uses [`HttpTransport`]
//! (reqwest), tests use [`MockTransport`](crate::mock::MockTransport).
//!
//! A transport does exactly one exchange per call. It does not interpret
//! status codes: a 404 is a successful exchange that happens to carry an
//! error document. Only a failure to talk to the server at all becomes an
//! error here.

use crate::document::Method;
use crate::error::FrameworkError;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, LOCATION};
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, instrument};

/// Media type of Mason documents.
pub const MASON_JSON: &str = "application/vnd.mason+json";
/// Media type of request bodies.
pub const PLAIN_JSON: &str = "application/json";

/// One outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL or a path relative to the API root.
    pub href: String,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn get(href: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            href: href.into(),
            body: None,
        }
    }

    pub fn write(href: impl Into<String>, method: Method, body: Option<Value>) -> Self {
        Self {
            method,
            href: href.into(),
            body,
        }
    }
}

/// The parts of a response the client uses.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub location: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP exchange.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FrameworkError>;
}

/// reqwest-backed transport rooted at a fixed API origin.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    api_root: Url,
}

impl HttpTransport {
    pub fn new(api_root: &str) -> Result<Self, FrameworkError> {
        let api_root = Url::parse(api_root).map_err(|e| {
            FrameworkError::Malformed(format!("invalid API root {api_root:?}: {e}"))
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_root,
        })
    }

    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    /// Resolves an href from a document against the API root. Absolute
    /// hrefs are returned unchanged.
    pub fn resolve(&self, href: &str) -> Result<Url, FrameworkError> {
        self.api_root
            .join(href)
            .map_err(|e| FrameworkError::Malformed(format!("invalid href {href:?}: {e}")))
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(method = %request.method, href = %request.href))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FrameworkError> {
        let url = self.resolve(&request.href)?;
        let mut builder = self
            .client
            .request(request.method.into(), url)
            .header(ACCEPT, format!("{MASON_JSON}, {PLAIN_JSON}"));
        if let Some(body) = &request.body {
            // .json() also sets Content-Type: application/json
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FrameworkError::request_failed(None, e.to_string()))?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .map_err(|e| FrameworkError::request_failed(Some(status), e.to_string()))?
            .to_vec();

        debug!(status, location = ?location, bytes = body.len(), "Response");
        Ok(HttpResponse {
            status,
            location,
            body,
        })
    }
}
