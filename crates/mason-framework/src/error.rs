//! # Framework Errors
//!
//! Every failure the hypermedia loop can run into is one of these variants.
//! From the user's point of view they all collapse into a single kind, "the
//! request failed", and end up as text in the notification region; the
//! variants exist so code and tests can tell them apart.

/// Errors that can occur while following hypermedia controls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    /// Network failure or non-2xx response. `message` is the server's
    /// `@error.@message` when present, a generic text otherwise.
    #[error("{message}")]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },
    /// A control the current step depends on is absent from the document.
    #[error("Missing control: {0}")]
    MissingControl(String),
    /// The response body could not be read as a hypermedia document.
    #[error("Malformed document: {0}")]
    Malformed(String),
    #[error("Navigator closed")]
    NavigatorClosed,
    #[error("Navigator dropped response channel")]
    NavigatorDropped,
}

impl FrameworkError {
    pub fn request_failed(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of a failed request, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }
}
