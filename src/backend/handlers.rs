use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Shared, read-only backend state.
#[derive(Clone)]
pub struct BackendState {
    pub hostname: Arc<str>,
}

/// Body of `GET /info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendInfo {
    pub backend_host: String,
}

/// `GET /info`: this instance's host name as JSON.
pub async fn info(State(state): State<BackendState>) -> Json<BackendInfo> {
    Json(BackendInfo {
        backend_host: state.hostname.to_string(),
    })
}
