//! # Views
//!
//! Pure functions from a fetched [`Document`] (and, for views that only
//! update part of the page, the current [`Screen`]) to the next screen.
//! None of them perform I/O; follow-up requests are decided by the
//! [`dispatcher`](crate::console::dispatcher).
//!
//! Controls a view merely offers as links are optional: when the document
//! lacks one, the link is simply not shown. Controls a view cannot work
//! without (the `self` of a collection, the schema control of a form) are
//! looked up with [`Document::require`] and their absence fails the
//! navigation with `MissingControl`.

pub mod collection;
pub mod drink;
pub mod forms;
pub mod ingredient;
pub mod pairing;
pub mod recipe;

use crate::console::Continuation;
use crate::model::Rel;
use crate::screen::Link;
use mason_framework::{Document, Navigation};

/// Appends a link following `rel`, if the document has it.
fn push_link(links: &mut Vec<Link>, doc: &Document, rel: Rel, label: &str, then: Continuation) {
    if let Some(control) = doc.control(rel) {
        links.push(Link::new(label, Navigation::follow(control, then)));
    }
}
