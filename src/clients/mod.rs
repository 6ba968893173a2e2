//! Type-safe wrappers around [`NavigatorClient`](mason_framework::NavigatorClient).

pub mod admin_client;

pub use admin_client::*;
