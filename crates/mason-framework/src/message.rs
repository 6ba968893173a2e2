//! # Navigator Messages
//!
//! What travels between [`NavigatorClient`](crate::NavigatorClient) and
//! [`Navigator`](crate::Navigator).
//!
//! A [`Navigation`] is the only way to make the client talk to the server.
//! It bundles the request (href, verb, optional JSON payload) with the
//! continuation that decides how the response is turned into a screen, so a
//! link can never be activated without saying what happens next.

use crate::console::Console;
use crate::document::{Control, Method};
use crate::error::FrameworkError;
use serde_json::Value;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the navigator.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// One request plus the continuation that will handle its result.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation<K> {
    pub href: String,
    pub method: Method,
    pub payload: Option<Value>,
    pub then: K,
}

impl<K> Navigation<K> {
    pub fn get(href: impl Into<String>, then: K) -> Self {
        Self {
            href: href.into(),
            method: Method::Get,
            payload: None,
            then,
        }
    }

    pub fn write(href: impl Into<String>, method: Method, payload: Option<Value>, then: K) -> Self {
        Self {
            href: href.into(),
            method,
            payload,
            then,
        }
    }

    /// GET the (template-expanded) target of a control, whatever verb the
    /// control itself declares. Views use this to open forms for write
    /// controls before anything is submitted.
    pub fn follow(control: &Control, then: K) -> Self {
        Self::get(control.target(), then)
    }
}

/// Internal message type sent to the navigator.
///
/// `Navigate` with `respond_to: None` is fire-and-forget: the screen still
/// changes, nobody is told when.
#[derive(Debug)]
pub enum NavigatorRequest<C: Console> {
    Navigate {
        navigation: Navigation<C::Continuation>,
        respond_to: Option<Response<C::Screen>>,
    },
    Screen {
        respond_to: Response<C::Screen>,
    },
}
