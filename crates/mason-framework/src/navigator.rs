//! # Navigator Actor
//!
//! The "server" half of the render loop. The navigator owns the one and only
//! current screen and is the only place it is ever replaced.

use crate::client::NavigatorClient;
use crate::console::{Console, Step};
use crate::error::FrameworkError;
use crate::fetcher::{Fetcher, Outcome};
use crate::message::{Navigation, NavigatorRequest, Response};
use crate::transport::Transport;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// A network call that has finished and waits to be applied.
struct Completion<C: Console> {
    then: C::Continuation,
    result: Result<Outcome, FrameworkError>,
    respond_to: Option<Response<C::Screen>>,
}

/// The actor that drives a [`Console`].
///
/// # Architecture Note
/// The navigator owns the screen and the receiver end of the request channel.
/// Network calls run in their own tasks so a slow server never blocks the
/// loop, but their results come back over an internal channel and are
/// applied here, one at a time, in arrival order.
///
/// **Concurrency Model**:
/// There is no in-flight guard and nothing is cancelled. If the user clicks
/// two links, both requests run and whichever response arrives last decides
/// the final screen. Each application swaps the whole screen for a new value,
/// so a reader never sees half of one view and half of another.
///
/// **Chaining**:
/// When a continuation asks for a follow-up (e.g. "now GET the `Location`
/// of what was just created"), the follow-up is dispatched right after the
/// screen is replaced and inherits the caller's response channel. A caller
/// awaiting [`NavigatorClient::navigate`] therefore receives the screen at
/// the end of the chain.
///
/// # Usage Pattern
///
/// ```rust,no_run
/// # use mason_framework::{Console, FrameworkError, Navigation, Navigator, Outcome, Step};
/// # use mason_framework::mock::MockTransport;
/// # #[derive(Debug, Clone, Default)] struct S;
/// # struct C;
/// # impl Console for C {
/// #     type Screen = S; type Continuation = ();
/// #     fn advance(&self, _: &S, _: &(), _: Outcome) -> Result<Step<S, ()>, FrameworkError> { Ok(Step::render(S)) }
/// #     fn on_failure(&self, _: &S, _: &FrameworkError) -> S { S }
/// # }
/// #[tokio::main]
/// async fn main() {
///     let transport = MockTransport::new();
///     let (navigator, client) = Navigator::new(C, transport.shared(), 32);
///     let handle = tokio::spawn(navigator.run());
///
///     let _screen = client.navigate(Navigation::get("/api/recipes/", ())).await;
///
///     drop(client);
///     handle.await.unwrap();
/// }
/// ```
pub struct Navigator<C: Console> {
    console: C,
    fetcher: Fetcher,
    receiver: mpsc::Receiver<NavigatorRequest<C>>,
    completed_tx: mpsc::UnboundedSender<Completion<C>>,
    completed_rx: mpsc::UnboundedReceiver<Completion<C>>,
    screen: C::Screen,
    in_flight: usize,
}

impl<C: Console> Navigator<C> {
    /// Creates a navigator and its client.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When full, client
    ///   calls wait for space.
    pub fn new(
        console: C,
        transport: Arc<dyn Transport>,
        buffer_size: usize,
    ) -> (Self, NavigatorClient<C>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (completed_tx, completed_rx) = mpsc::unbounded_channel();
        let navigator = Self {
            console,
            fetcher: Fetcher::new(transport),
            receiver,
            completed_tx,
            completed_rx,
            screen: C::Screen::default(),
            in_flight: 0,
        };
        (navigator, NavigatorClient::new(sender))
    }

    /// Runs the event loop.
    ///
    /// Returns once every client has been dropped and no request is still in
    /// flight.
    pub async fn run(mut self) {
        let console = std::any::type_name::<C>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(console, "Navigator started");

        let mut accepting = true;
        loop {
            if !accepting && self.in_flight == 0 {
                break;
            }
            tokio::select! {
                request = self.receiver.recv(), if accepting => match request {
                    Some(request) => self.handle(request),
                    None => {
                        debug!(console, in_flight = self.in_flight, "All clients dropped");
                        accepting = false;
                    }
                },
                Some(completion) = self.completed_rx.recv() => self.complete(completion),
                else => break,
            }
        }

        info!(console, "Shutdown");
    }

    fn handle(&mut self, request: NavigatorRequest<C>) {
        match request {
            NavigatorRequest::Navigate {
                navigation,
                respond_to,
            } => self.dispatch(navigation, respond_to),
            NavigatorRequest::Screen { respond_to } => {
                let _ = respond_to.send(Ok(self.screen.clone()));
            }
        }
    }

    fn dispatch(
        &mut self,
        navigation: Navigation<C::Continuation>,
        respond_to: Option<Response<C::Screen>>,
    ) {
        let Navigation {
            href,
            method,
            payload,
            then,
        } = navigation;
        debug!(%href, %method, ?then, "Dispatch");

        self.in_flight += 1;
        let fetcher = self.fetcher.clone();
        let completed = self.completed_tx.clone();
        tokio::spawn(async move {
            let result = fetcher.perform(&href, method, payload).await;
            // The receiver lives as long as the navigator.
            let _ = completed.send(Completion {
                then,
                result,
                respond_to,
            });
        });
    }

    fn complete(&mut self, completion: Completion<C>) {
        self.in_flight -= 1;
        let Completion {
            then,
            result,
            respond_to,
        } = completion;

        let step = result.and_then(|outcome| self.console.advance(&self.screen, &then, outcome));
        match step {
            Ok(Step { screen, follow_up }) => {
                self.screen = screen;
                info!(?then, in_flight = self.in_flight, "Rendered");
                match follow_up {
                    Some(next) => self.dispatch(next, respond_to),
                    None => self.respond(respond_to),
                }
            }
            Err(error) => {
                warn!(?then, %error, status = ?error.status(), "Navigation failed");
                self.screen = self.console.on_failure(&self.screen, &error);
                self.respond(respond_to);
            }
        }
    }

    fn respond(&self, respond_to: Option<Response<C::Screen>>) {
        if let Some(respond_to) = respond_to {
            let _ = respond_to.send(Ok(self.screen.clone()));
        }
    }
}
