use crate::console::{AdminConsole, Continuation};
use crate::error::AdminError;
use crate::model::ResourceKind;
use crate::screen::{Form, Screen};
use async_trait::async_trait;
use mason_framework::{ConsoleClient, Navigation, NavigatorClient};
use tracing::{debug, instrument};

/// Client for driving the admin console.
#[derive(Clone)]
pub struct AdminClient {
    inner: NavigatorClient<AdminConsole>,
}

impl AdminClient {
    pub fn new(inner: NavigatorClient<AdminConsole>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ConsoleClient<AdminConsole> for AdminClient {
    type Error = AdminError;

    fn inner(&self) -> &NavigatorClient<AdminConsole> {
        &self.inner
    }
}

impl AdminClient {
    /// Loads the collection of `kind` from its entry point.
    #[instrument(skip(self))]
    pub async fn open(&self, kind: ResourceKind) -> Result<Screen, AdminError> {
        debug!("Sending request");
        self.follow(Navigation::get(
            kind.collection_href(),
            Continuation::Collection(kind),
        ))
        .await
    }

    /// Follows the link shown as `[number]` on `screen`.
    #[instrument(skip(self, screen))]
    pub async fn activate(&self, screen: &Screen, number: usize) -> Result<Screen, AdminError> {
        let link = screen.link(number).ok_or(AdminError::NoSuchLink(number))?;
        debug!(label = %link.label, "Following link");
        self.follow(link.navigation.clone()).await
    }

    /// Submits a form. Invalid input fails here, before any request is made.
    #[instrument(skip(self, form), fields(title = %form.title))]
    pub async fn submit(&self, form: &Form) -> Result<Screen, AdminError> {
        let navigation = form.navigation()?;
        self.follow(navigation).await
    }

    /// Fills the form of `screen` with `values` and submits it.
    pub async fn submit_with(
        &self,
        screen: &Screen,
        values: &[(&str, &str)],
    ) -> Result<Screen, AdminError> {
        let mut form = screen.form.clone().ok_or(AdminError::NoForm)?;
        for (name, value) in values {
            form.fill(name, value)?;
        }
        self.submit(&form).await
    }

    /// Queues a navigation without waiting for its screen.
    #[instrument(skip(self, navigation), fields(href = %navigation.href))]
    pub async fn dispatch(&self, navigation: Navigation<Continuation>) -> Result<(), AdminError> {
        debug!("Sending request");
        Ok(self.inner.dispatch(navigation).await?)
    }
}
