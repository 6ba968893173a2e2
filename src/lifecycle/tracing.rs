//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! Output goes to stderr so it never mixes with the screen the terminal
//! front-end prints on stdout.
//!
//! ## Configuration
//!
//! Log levels come from `RUST_LOG`. The format is compact and hides the
//! module prefix (`with_target(false)`); spans show inline.
//!
//! ## What Gets Traced
//!
//! - **Navigator Lifecycle**: startup, all clients dropped, shutdown
//! - **Requests**: every exchange with `method`, `href` and the response `status`
//! - **Continuations**: which view a document is rendered with (`then`)
//! - **Failures**: the server's message for every non-2xx response
//! - **Unknown controls**: control names the console does not recognise
//!
//! ## Usage Examples
//!
//! ```bash
//! # Quiet: only failures and unknown controls
//! RUST_LOG=warn bigrecipe-admin
//!
//! # Every request and rendered view
//! RUST_LOG=debug bigrecipe-admin --entry drinks
//!
//! # Only the HTTP layer
//! RUST_LOG=mason_framework::transport=debug bigrecipe-admin
//! ```
//!
//! ## Workflow Trace Example
//!
//! Opening a recipe with `RUST_LOG=debug`:
//!
//! ```text
//! DEBUG follow{href=/api/recipes/Chili/ method=GET}: Sending request then=Detail(Recipe)
//! DEBUG send{method=GET href=/api/recipes/Chili/}: Response status=200
//! DEBUG Rendering document then=Recipe detail
//! DEBUG send{method=GET href=/api/recipes/Chili/ingredients/}: Response status=200
//! DEBUG Rendering document then=pairing list
//! ```
//!
//! The second request is the automatic pairing fetch chained by the recipe
//! detail view.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
