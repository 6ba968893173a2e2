//! # ConsoleClient Trait
//!
//! Common interface for application-specific clients, adding default
//! `screen` and `follow` methods built on top of a [`NavigatorClient`].
use crate::{Console, FrameworkError, Navigation, NavigatorClient};
use async_trait::async_trait;

/// Trait for application clients to inherit the basic navigator operations.
///
/// # Example
///
/// ```rust
/// use mason_framework::{Console, ConsoleClient, FrameworkError, NavigatorClient, Outcome, Step};
/// use async_trait::async_trait;
///
/// # #[derive(Debug, Clone, Default)] struct Screen;
/// # struct Admin;
/// # impl Console for Admin {
/// #     type Screen = Screen; type Continuation = ();
/// #     fn advance(&self, _: &Screen, _: &(), _: Outcome) -> Result<Step<Screen, ()>, FrameworkError> { Ok(Step::render(Screen)) }
/// #     fn on_failure(&self, _: &Screen, _: &FrameworkError) -> Screen { Screen }
/// # }
/// #[derive(Debug, thiserror::Error)]
/// enum AdminError {
///     #[error(transparent)]
///     Framework(#[from] FrameworkError),
/// }
///
/// struct AdminClient {
///     inner: NavigatorClient<Admin>,
/// }
///
/// #[async_trait]
/// impl ConsoleClient<Admin> for AdminClient {
///     type Error = AdminError;
///
///     fn inner(&self) -> &NavigatorClient<Admin> {
///         &self.inner
///     }
/// }
///
/// async fn usage(client: AdminClient) {
///     // screen() and follow() are provided automatically
///     let _ = client.screen().await;
/// }
/// ```
#[async_trait]
pub trait ConsoleClient<C: Console>: Send + Sync {
    /// The application-specific error type.
    type Error: From<FrameworkError> + Send + Sync;

    /// Access the inner generic NavigatorClient.
    fn inner(&self) -> &NavigatorClient<C>;

    /// The current screen.
    #[tracing::instrument(skip(self))]
    async fn screen(&self) -> Result<C::Screen, Self::Error> {
        tracing::debug!("Sending request");
        Ok(self.inner().screen().await?)
    }

    /// Performs a navigation and returns the resulting screen.
    #[tracing::instrument(skip(self, navigation), fields(href = %navigation.href, method = %navigation.method))]
    async fn follow(&self, navigation: Navigation<C::Continuation>) -> Result<C::Screen, Self::Error> {
        tracing::debug!(then = ?navigation.then, "Sending request");
        Ok(self.inner().navigate(navigation).await?)
    }
}
