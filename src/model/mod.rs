//! Vocabulary of the recipe API: resource kinds, link relations and the
//! recipe/ingredient pairing map.

pub mod kind;
pub mod pairing;
pub mod relation;

pub use kind::ResourceKind;
pub use pairing::{pairings, Pairing};
pub use relation::Rel;
