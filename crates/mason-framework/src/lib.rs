//! # Mason Framework
//!
//! Building blocks for clients of hypermedia APIs that speak
//! [Mason](https://github.com/JornWildt/Mason): JSON documents that carry
//! their own `@controls` (links and forms) next to the data.
//!
//! ## Why an actor around a hypermedia client?
//!
//! A hypermedia client never hard-codes URLs. Each screen is derived from
//! the last document the server sent, and every action the user can take is
//! one of the controls in that document. That makes the client a loop:
//!
//! 1. issue a request against an href taken from a previous document,
//! 2. parse the response,
//! 3. pick a renderer for it,
//! 4. replace the screen,
//! 5. offer the new document's controls as the next actions.
//!
//! The loop has exactly one piece of mutable state, the current screen, and
//! responses can arrive in any order. An actor owning that screen gives us
//! sequential updates without locks, while the network calls themselves run
//! concurrently in their own tasks.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//! - [Mason format](https://github.com/JornWildt/Mason/blob/master/Documentation/Mason-draft-2.md) - The media type spoken by the server
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Document Layer** ([`Document`], [`Control`], [`LinkRelation`]) - the parsed hypermedia
//! 2. **Runtime Layer** ([`Navigator`], [`Fetcher`], [`Transport`]) - requests and screen ownership
//! 3. **Interface Layer** ([`NavigatorClient`], [`ConsoleClient`]) - type-safe communication
//!
//! Applications plug in at a single point, the [`Console`] trait: given the
//! current screen, a continuation and a response, produce the next screen
//! and optionally a follow-up request. Everything else is generic.
//!
//! ## Core Abstractions
//!
//! ### [`Navigation`] - Request plus continuation
//!
//! Every link or form on a screen carries a `Navigation { href, method,
//! payload, then }`. `then` is the application's continuation type; the
//! navigator hands it back to the console together with the response.
//!
//! ### [`Console`] - The application logic
//!
//! Pure functions. No I/O, no channels.
//!
//! ### [`Navigator`] - The runtime
//!
//! Owns the screen, spawns one task per request, applies completions in
//! arrival order, dispatches follow-ups. Last response wins.
//!
//! ## Quick Start
//!
//! ```rust
//! use mason_framework::mock::MockTransport;
//! use mason_framework::{Console, FrameworkError, Navigation, Navigator, Outcome, Step};
//! use serde_json::json;
//!
//! #[derive(Debug, Clone, Default)]
//! struct Screen {
//!     heading: String,
//!     error: Option<String>,
//! }
//!
//! struct Headings;
//!
//! impl Console for Headings {
//!     type Screen = Screen;
//!     type Continuation = ();
//!
//!     fn advance(&self, _: &Screen, _: &(), outcome: Outcome) -> Result<Step<Screen, ()>, FrameworkError> {
//!         let Outcome::Fetched(doc) = outcome else {
//!             return Err(FrameworkError::Malformed("expected a document".into()));
//!         };
//!         Ok(Step::render(Screen { heading: doc.text("name"), error: None }))
//!     }
//!
//!     fn on_failure(&self, screen: &Screen, error: &FrameworkError) -> Screen {
//!         Screen { error: Some(error.to_string()), ..screen.clone() }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let transport = MockTransport::new();
//!     transport.expect_get("/api/recipes/Chili/").return_json(200, json!({"name": "Chili"}));
//!
//!     let (navigator, client) = Navigator::new(Headings, transport.shared(), 8);
//!     let handle = tokio::spawn(navigator.run());
//!
//!     let screen = client.navigate(Navigation::get("/api/recipes/Chili/", ())).await.unwrap();
//!     assert_eq!(screen.heading, "Chili");
//!
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```

pub mod client;
pub mod client_trait;
pub mod console;
pub mod document;
pub mod error;
pub mod fetcher;
pub mod message;
pub mod mock;
pub mod navigator;
pub mod relation;
pub mod transport;

pub use client::NavigatorClient;
pub use client_trait::ConsoleClient;
pub use console::{Console, Step};
pub use document::{
    display_value, Control, Document, MasonError, Method, Namespace, Property, PropertyType,
    Relations, Schema,
};
pub use error::FrameworkError;
pub use fetcher::{Fetcher, Outcome, Submission};
pub use message::{Navigation, NavigatorRequest, Response};
pub use navigator::Navigator;
pub use relation::LinkRelation;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport, MASON_JSON, PLAIN_JSON};
