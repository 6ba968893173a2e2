use crate::clients::AdminClient;
use crate::config::AdminConfig;
use crate::console::AdminConsole;
use crate::error::AdminError;
use crate::model::ResourceKind;
use crate::screen::Screen;
use mason_framework::{FrameworkError, HttpTransport, Navigator, Transport};
use std::sync::Arc;
use tracing::{error, info};

/// Capacity of the navigator's request channel.
pub const NAVIGATOR_BUFFER: usize = 32;

/// The runtime orchestrator of the admin console.
///
/// `AdminSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the navigator task
/// - **Dependency Wiring**: injecting the transport the navigator talks through
///
/// # Example
///
/// ```ignore
/// let system = AdminSystem::new(&AdminConfig::default())?;
///
/// let screen = system.bootstrap(ResourceKind::Recipe).await?;
/// println!("{screen}");
///
/// system.shutdown().await?;
/// ```
pub struct AdminSystem {
    /// Client for driving the console
    pub client: AdminClient,

    /// Task handle of the navigator (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl AdminSystem {
    /// Starts a console talking HTTP to the configured API root.
    pub fn new(config: &AdminConfig) -> Result<Self, FrameworkError> {
        let transport = HttpTransport::new(&config.api_root)?;
        info!(api_root = %transport.api_root(), "Using API");
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Starts a console on any transport. Tests pass a mock here.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        let (navigator, client) = Navigator::new(AdminConsole, transport, NAVIGATOR_BUFFER);
        let handle = tokio::spawn(navigator.run());

        Self {
            client: AdminClient::new(client),
            handle,
        }
    }

    /// Loads the first screen.
    pub async fn bootstrap(&self, kind: ResourceKind) -> Result<Screen, AdminError> {
        info!(%kind, "Bootstrapping");
        self.client.open(kind).await
    }

    /// Gracefully shuts down the console.
    ///
    /// Dropping the client closes the navigator's channel; the navigator
    /// finishes requests still in flight and exits.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the navigator shut down cleanly
    /// - `Err(String)` if the navigator task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down console...");

        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Navigator task failed: {:?}", e);
            return Err(format!("Navigator task failed: {:?}", e));
        }

        info!("Console shutdown complete.");
        Ok(())
    }
}
