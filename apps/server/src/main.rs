//! Soundbar Server - Standalone headless service-dispatch server.
//!
//! Exposes the soundbar services over HTTP. Devices listed in the
//! configuration are registered as in-memory virtual soundbars, so service
//! calls can be exercised without hardware.

mod config;
mod virtual_device;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use soundbar_core::{
    start_server, AppState, DeviceHandle, DeviceRegistry, Dispatcher, LoggingDispatchEmitter,
    ServiceHost, TokioSpawner,
};
use tokio::signal;

use crate::config::ServerConfig;
use crate::virtual_device::{VirtualGroups, VirtualSoundbar};

/// Soundbar Server - Headless service dispatch for networked soundbars.
#[derive(Parser, Debug)]
#[command(name = "soundbar-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (YAML).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(short, long, default_value = "info", env = "SOUNDBAR_LOG_LEVEL")]
    log_level: log::LevelFilter,

    /// Bind port (overrides config file).
    #[arg(short = 'p', long, env = "SOUNDBAR_BIND_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(args.log_level)
        .format_timestamp_millis()
        .init();

    log::info!("Soundbar Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config =
        ServerConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    // Apply CLI overrides
    if let Some(port) = args.port {
        config.bind_port = port;
    }

    log::info!(
        "Configuration: bind_port={}, devices={}",
        config.bind_port,
        config.devices.len()
    );

    let registry = Arc::new(DeviceRegistry::new());
    let groups = VirtualGroups::new();
    for device in &config.devices {
        let handle: DeviceHandle = Arc::new(VirtualSoundbar::new(
            device.entity_id.clone(),
            device.display_name(),
            groups.clone(),
        ));
        registry.insert(handle);
    }
    if registry.is_empty() {
        log::warn!("No devices configured - every service call will resolve to no targets");
    }

    let dispatcher = Dispatcher::new(registry, Arc::new(LoggingDispatchEmitter));
    let host = ServiceHost::new(Arc::new(dispatcher), TokioSpawner::current());
    let app_state = AppState::new(Arc::new(host));

    start_server(app_state, config.bind_port, shutdown_signal())
        .await
        .context("HTTP server failed")?;

    log::info!("Shutdown complete");
    Ok(())
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Shutdown signal received, cleaning up...");
}
