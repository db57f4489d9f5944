use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
};

use crate::frontend::client::BackendClient;
use crate::http::request_id;
use crate::observability::metrics;

/// Shown in place of the backend host name when the call fails.
pub const UNAVAILABLE: &str = "unavailable";

/// Shared, read-only frontend state.
#[derive(Clone)]
pub struct FrontendState {
    pub hostname: Arc<str>,
    pub client: Arc<BackendClient>,
}

/// Plain-text body of `GET /info`.
pub fn render_info(frontend_host: &str, backend_host: &str) -> String {
    format!("Frontend: {frontend_host}\nBackend: {backend_host}\n")
}

/// `GET /info`: relay the backend host name, or 502 with the fallback body.
pub async fn info(State(state): State<FrontendState>, headers: HeaderMap) -> (StatusCode, String) {
    match state.client.fetch_backend_host(request_id(&headers)).await {
        Ok(backend_host) => {
            metrics::record_upstream("ok");
            (StatusCode::OK, render_info(&state.hostname, &backend_host))
        }
        Err(e) => {
            metrics::record_upstream(e.outcome());
            tracing::error!(
                frontend_host = %state.hostname,
                backend_url = %state.client.url(),
                error = %e,
                "Error calling backend"
            );
            (StatusCode::BAD_GATEWAY, render_info(&state.hostname, UNAVAILABLE))
        }
    }
}
