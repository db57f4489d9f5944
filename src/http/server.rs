//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Wrap a service router with the shared middleware stack
//!   (request ID, tracing, request timeout, metrics)
//! - Bind server to listener
//! - Stop accepting and drain on shutdown

use std::time::Duration;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ServiceConfig, ServiceRole};
use crate::http::middleware::track_requests;
use crate::http::request::MakeRequestUuidV4;

/// HTTP server for one of the demo services.
pub struct HttpServer {
    role: ServiceRole,
    router: Router,
}

impl HttpServer {
    /// Create a server from a service's routes and the shared config.
    pub fn new(role: ServiceRole, routes: Router, config: &ServiceConfig) -> Self {
        let router = Self::build_router(role, routes, config);
        Self { role, router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(role: ServiceRole, routes: Router, config: &ServiceConfig) -> Router {
        routes
            .layer(middleware::from_fn_with_state(role, track_requests))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires (or its sender is dropped).
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            service = self.role.name(),
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!(service = self.role.name(), "HTTP server stopped");
        Ok(())
    }
}
