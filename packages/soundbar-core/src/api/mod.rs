//! HTTP API layer.
//!
//! Thin handlers that delegate to the [`ServiceHost`]. This module provides
//! the router construction and server startup functionality.

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;

use crate::registry::DeviceRegistry;
use crate::services::ServiceHost;

pub mod http;
pub mod response;

/// Errors that can occur when starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the TCP port or serve connections on it.
    #[error("Failed to bind to port: {0}")]
    Bind(#[from] std::io::Error),
}

/// Shared application state for the API layer.
///
/// All business logic lives in the service host.
#[derive(Clone)]
pub struct AppState {
    /// Validates and dispatches service calls.
    pub host: Arc<ServiceHost>,
}

impl AppState {
    pub fn new(host: Arc<ServiceHost>) -> Self {
        Self { host }
    }

    /// The registry the host dispatches against.
    pub fn registry(&self) -> &Arc<DeviceRegistry> {
        self.host.registry()
    }
}

/// Serves the HTTP API on `port` until `shutdown` resolves.
pub async fn start_server<F>(state: AppState, port: u16, shutdown: F) -> Result<(), ServerError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("[Api] Server listening on http://{}", listener.local_addr()?);
    let app = http::create_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
