//! Frontend service: relays the backend's host name next to its own.
//!
//! ```text
//! GET /health → 200 "ok"
//! GET /info   → backend /info (single attempt, bounded by timeout)
//!             → 200 "Frontend: <host>\nBackend: <backend_host>\n"
//!             → 502 "Frontend: <host>\nBackend: unavailable\n"
//! ```

pub mod client;
pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::http::health::health;

pub use client::{BackendClient, ClientError, UpstreamError};
pub use handlers::FrontendState;

/// Routes served by the frontend.
pub fn router(hostname: Arc<str>, client: BackendClient) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(handlers::info))
        .with_state(FrontendState {
            hostname,
            client: Arc::new(client),
        })
}
