//! # Errors
//!
//! Two layers, mirroring where things go wrong:
//!
//! - [`FormError`]: the user's input cannot become a request. Raised before
//!   anything touches the network.
//! - [`AdminError`]: everything an [`AdminClient`](crate::clients::AdminClient)
//!   call can fail with, wrapping [`FrameworkError`] and [`FormError`] via
//!   `#[from]`.

use mason_framework::FrameworkError;

/// Reasons a form cannot be submitted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingRequired(String),
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: String, value: String },
    #[error("{field} must be true or false, got {value:?}")]
    InvalidFlag { field: String, value: String },
    #[error("no field named {0}")]
    UnknownField(String),
    #[error("{0} cannot be changed")]
    LockedField(String),
    #[error("this form only displays data")]
    NotSubmittable,
}

/// Errors returned by the admin client.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error(transparent)]
    Framework(#[from] FrameworkError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("no link numbered {0}")]
    NoSuchLink(usize),
    #[error("the current screen has no form")]
    NoForm,
}
