//! # Console Trait
//!
//! The application half of the render loop. A [`Console`] knows nothing
//! about channels or tasks; it is a pure state machine the
//! [`Navigator`](crate::Navigator) drives:
//!
//! ```text
//! (current screen, continuation, outcome) --advance--> (next screen, follow-up?)
//! (current screen, error)                 --on_failure--> next screen
//! ```
//!
//! Keeping both functions synchronous and side-effect free means every view
//! can be tested by feeding it a document, no runtime required.

use crate::error::FrameworkError;
use crate::fetcher::Outcome;
use crate::message::Navigation;
use std::fmt::Debug;

/// Result of applying one completed navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S, K> {
    /// Replaces the current screen.
    pub screen: S,
    /// Chained request to dispatch right after the screen is replaced.
    pub follow_up: Option<Navigation<K>>,
}

impl<S, K> Step<S, K> {
    pub fn render(screen: S) -> Self {
        Self {
            screen,
            follow_up: None,
        }
    }

    pub fn then(mut self, navigation: Navigation<K>) -> Self {
        self.follow_up = Some(navigation);
        self
    }
}

/// The application-specific logic of a hypermedia console.
///
/// # Example
///
/// ```rust
/// use mason_framework::{Console, FrameworkError, Outcome, Step};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Title(String);
///
/// struct TitleConsole;
///
/// impl Console for TitleConsole {
///     type Screen = Title;
///     type Continuation = ();
///
///     fn advance(
///         &self,
///         _screen: &Title,
///         _then: &(),
///         outcome: Outcome,
///     ) -> Result<Step<Title, ()>, FrameworkError> {
///         match outcome {
///             Outcome::Fetched(doc) => Ok(Step::render(Title(doc.text("name")))),
///             Outcome::Submitted(_) => Ok(Step::render(Title("saved".into()))),
///         }
///     }
///
///     fn on_failure(&self, _screen: &Title, error: &FrameworkError) -> Title {
///         Title(error.to_string())
///     }
/// }
/// ```
pub trait Console: Send + Sync + 'static {
    /// Everything the user currently sees.
    type Screen: Clone + Debug + Default + Send + Sync + 'static;
    /// Named state telling the console what a response means.
    type Continuation: Clone + Debug + Send + Sync + 'static;

    /// Applies a successful response.
    fn advance(
        &self,
        screen: &Self::Screen,
        then: &Self::Continuation,
        outcome: Outcome,
    ) -> Result<Step<Self::Screen, Self::Continuation>, FrameworkError>;

    /// Applies a failed navigation. Implementations should only touch the
    /// part of the screen that reports errors.
    fn on_failure(&self, screen: &Self::Screen, error: &FrameworkError) -> Self::Screen;
}
