//! The admin console: named continuations and the state machine that
//! applies responses to the screen.

pub mod continuation;
pub mod dispatcher;

pub use continuation::Continuation;
pub use dispatcher::AdminConsole;
