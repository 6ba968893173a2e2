//! # Navigator Client
//!
//! The handle applications hold to drive a [`Navigator`](crate::Navigator).

use crate::console::Console;
use crate::error::FrameworkError;
use crate::message::{Navigation, NavigatorRequest};
use tokio::sync::{mpsc, oneshot};

/// ## NavigatorClient
///
/// Forwards navigations over an mpsc channel and receives screens over
/// oneshot channels. Holds only a sender, so it is cheap to clone and can be
/// shared between tasks; the navigator stops once every clone is gone.
pub struct NavigatorClient<C: Console> {
    sender: mpsc::Sender<NavigatorRequest<C>>,
}

// Manual impl: a derive would demand `C: Clone`.
impl<C: Console> Clone for NavigatorClient<C> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<C: Console> NavigatorClient<C> {
    pub fn new(sender: mpsc::Sender<NavigatorRequest<C>>) -> Self {
        Self { sender }
    }

    /// Performs a navigation and waits for the screen at the end of its
    /// chain. A failed request still yields a screen; the failure is in its
    /// notification.
    pub async fn navigate(
        &self,
        navigation: Navigation<C::Continuation>,
    ) -> Result<C::Screen, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(NavigatorRequest::Navigate {
                navigation,
                respond_to: Some(respond_to),
            })
            .await
            .map_err(|_| FrameworkError::NavigatorClosed)?;
        response.await.map_err(|_| FrameworkError::NavigatorDropped)?
    }

    /// Queues a navigation without waiting for it.
    pub async fn dispatch(
        &self,
        navigation: Navigation<C::Continuation>,
    ) -> Result<(), FrameworkError> {
        self.sender
            .send(NavigatorRequest::Navigate {
                navigation,
                respond_to: None,
            })
            .await
            .map_err(|_| FrameworkError::NavigatorClosed)
    }

    /// The screen as it is right now.
    pub async fn screen(&self) -> Result<C::Screen, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(NavigatorRequest::Screen { respond_to })
            .await
            .map_err(|_| FrameworkError::NavigatorClosed)?;
        response.await.map_err(|_| FrameworkError::NavigatorDropped)?
    }
}
