//! Startup orchestration shared by both binaries.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Metrics recorder is installed before traffic is accepted
//! - Listener binds last

use std::net::SocketAddr;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ServiceConfig, ServiceRole};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid metrics address {0:?}")]
    MetricsAddress(String),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind the configured address and serve `routes` until SIGINT/SIGTERM.
pub async fn serve(
    role: ServiceRole,
    routes: Router,
    config: &ServiceConfig,
) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let address = config.listener.bind_address(role);
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;

    tracing::info!("Running {} REST server on {}", role, address);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::install(shutdown);

    HttpServer::new(role, routes, config)
        .run(listener, server_shutdown)
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("Shutdown complete");
    Ok(())
}
