//! # System Lifecycle
//!
//! Starting, wiring and stopping the console.
//!
//! The navigator is a single Tokio task owning the current screen. Nothing
//! else holds state, so the lifecycle is short:
//!
//! 1. **Transport** - build the [`HttpTransport`](mason_framework::HttpTransport)
//!    from [`AdminConfig`](crate::config::AdminConfig), or inject any other
//!    [`Transport`](mason_framework::Transport)
//! 2. **Start** - spawn the navigator and hand out an [`AdminClient`](crate::clients::AdminClient)
//! 3. **Bootstrap** - load the entry collection
//! 4. **Shutdown** - drop the client, let in-flight requests finish, join the task
//!
//! [`setup_tracing`] initializes logging once per process.

pub mod admin_system;
pub mod tracing;

pub use admin_system::*;
pub use self::tracing::*;
