//! # Link Relations
//!
//! Mason documents key their controls by name (`self`, `edit`,
//! `bigrec:add-recipe`, ...). Looking those names up as raw strings leaves
//! every typo as a silent no-op, so applications declare a closed set of
//! relations by implementing [`LinkRelation`] on an enum, and the
//! [`Document`](crate::Document) accessors take that enum instead of `&str`.

use std::fmt::Debug;

/// A closed set of control names understood by an application.
///
/// # Example
///
/// ```rust
/// use mason_framework::LinkRelation;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Rel { SelfLink, Next }
///
/// impl LinkRelation for Rel {
///     const ALL: &'static [Self] = &[Rel::SelfLink, Rel::Next];
///
///     fn name(self) -> &'static str {
///         match self {
///             Rel::SelfLink => "self",
///             Rel::Next => "next",
///         }
///     }
/// }
///
/// assert_eq!(Rel::from_name("next"), Some(Rel::Next));
/// assert_eq!(Rel::from_name("bogus"), None);
/// ```
pub trait LinkRelation: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every relation of the set, used for reverse lookup.
    const ALL: &'static [Self];

    /// The control name as it appears in `@controls`.
    fn name(self) -> &'static str;

    /// Parses a control name; `None` for names outside the set.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|rel| rel.name() == name)
    }
}
