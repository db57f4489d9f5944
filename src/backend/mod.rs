//! Backend service: reports its own host name.
//!
//! ```text
//! GET /health → 200 "ok"
//! GET /info   → 200 {"backend_host": "<hostname>"}
//! ```

pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::http::health::health;

pub use handlers::{BackendInfo, BackendState};

/// Routes served by the backend.
pub fn router(hostname: Arc<str>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(handlers::info))
        .with_state(BackendState { hostname })
}
