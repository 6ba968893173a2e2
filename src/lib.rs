//! # BigRecipe Admin
//!
//! > **An admin console that only knows what the API tells it.**
//!
//! This crate is a client for the BigRecipe hypermedia API (recipes,
//! ingredients, drinks and the pairings between recipes and ingredients).
//! It hard-codes three entry points and nothing else: every further URL,
//! verb and form field is read from the `@controls` of the documents the
//! server returns.
//!
//! ## 🏗️ Design
//!
//! ### One screen, replaced on every response
//! The console shows exactly one [`Screen`](screen::Screen): navigation links,
//! pagination, a result table, a form and a notification line. A response
//! never edits the screen in place; a view function builds the next one.
//!
//! ### Continuations instead of callbacks
//! Every link and form carries a [`Continuation`](console::Continuation)
//! naming what to do with the response (`Detail(Recipe)`, `Created(Drink)`,
//! `PairingList`, ...). The [`AdminConsole`](console::AdminConsole) matches
//! on it to pick the view and to decide whether a second request follows,
//! e.g. the ingredient list of a recipe or the `Location` of a new resource.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Input problems are [`FormError`](error::FormError)s and stop a submission
//! before any request is made. Network and document problems are
//! [`FrameworkError`](mason_framework::FrameworkError)s; they end up in the
//! notification line and leave the rest of the screen alone.
//!
//! ### 2. Concurrency Model
//! The [`Navigator`](mason_framework::Navigator) task owns the screen. Each
//! navigation runs as its own request task; responses are applied in the
//! order they arrive, so when two navigations overlap the last response wins.
//!
//! ### 3. Observability
//! `tracing` everywhere, set up by [`lifecycle::setup_tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine (`mason_framework`)
//! Documents, controls, the HTTP transport and the navigator loop. Knows
//! nothing about recipes.
//!
//! ### 2. The Vocabulary ([`model`])
//! Resource kinds, link relations and the pairing map.
//!
//! ### 3. The Views ([`views`], [`screen`])
//! Pure functions from documents to screens, plus HTML and text rendering.
//!
//! ### 4. The State Machine ([`console`])
//! Continuations and the console that applies responses.
//!
//! ### 5. The Interface ([`clients`], [`lifecycle`], [`config`])
//! [`AdminClient`](clients::AdminClient) for following links and submitting
//! forms, [`AdminSystem`](lifecycle::AdminSystem) for starting and stopping
//! the navigator, and the command-line options.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Browse recipes on a local API
//! RUST_LOG=info cargo run
//!
//! # Start at the drinks, print HTML, exit after the first screen
//! cargo run -- --entry drinks --html --once
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod console;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod screen;
pub mod views;
