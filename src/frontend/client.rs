//! Outbound call from the frontend to the backend's `/info`.
//!
//! # Design Decisions
//! - Exactly one attempt per inbound request; no retries or backoff
//! - One total deadline covers connect, headers and body
//! - Idle connections are not kept between calls

use std::time::Duration;

use axum::http::{HeaderValue, StatusCode};
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::UpstreamConfig;
use crate::http::X_REQUEST_ID;

/// Reported when the backend's JSON object has no `backend_host` key.
pub const UNKNOWN_HOST: &str = "unknown";

/// Why a backend call failed. Every variant maps to `502 Bad Gateway`.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("backend did not answer within {0:?}")]
    Timeout(Duration),

    #[error("failed to connect to backend: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("backend returned status {0}")]
    Status(StatusCode),

    #[error("backend returned a malformed body: {0}")]
    Body(String),

    #[error("backend request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl UpstreamError {
    /// Short label for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            UpstreamError::Timeout(_) => "timeout",
            UpstreamError::Connect(_) => "connect",
            UpstreamError::Status(_) => "status",
            UpstreamError::Body(_) => "body",
            UpstreamError::Request(_) => "request",
        }
    }
}

/// Error building a [`BackendClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid backend URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// HTTP client bound to one backend URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    url: Url,
    timeout: Duration,
}

impl BackendClient {
    /// Build a client with a total per-call `timeout` and no idle pool.
    pub fn new(url: Url, timeout: Duration, use_system_proxy: bool) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0);
        if !use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            url,
            timeout,
        })
    }

    /// Build a client from the `[upstream]` config section.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, ClientError> {
        let url = Url::parse(&config.backend_url).map_err(|source| ClientError::InvalidUrl {
            url: config.backend_url.clone(),
            source,
        })?;
        Self::new(
            url,
            Duration::from_secs(config.timeout_secs),
            config.use_system_proxy,
        )
    }

    /// The backend info URL this client calls.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the backend's host name.
    ///
    /// `request_id` is forwarded as `x-request-id` so both services log
    /// the same ID for one client request.
    pub async fn fetch_backend_host(
        &self,
        request_id: Option<&HeaderValue>,
    ) -> Result<String, UpstreamError> {
        let mut request = self.client.get(self.url.clone());
        if let Some(id) = request_id {
            request = request.header(X_REQUEST_ID, id.clone());
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        parse_backend_host(&body)
    }

    fn classify(&self, error: reqwest::Error) -> UpstreamError {
        if error.is_timeout() {
            UpstreamError::Timeout(self.timeout)
        } else if error.is_connect() {
            UpstreamError::Connect(error)
        } else {
            UpstreamError::Request(error)
        }
    }
}

/// Extract `backend_host` from a backend `/info` body.
///
/// The body must be a JSON object. A missing key yields [`UNKNOWN_HOST`].
/// `null` and booleans are spelled `None`, `True` and `False`; any other
/// non-string value is rendered as JSON text.
pub fn parse_backend_host(body: &[u8]) -> Result<String, UpstreamError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| UpstreamError::Body(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| UpstreamError::Body("expected a JSON object".to_string()))?;

    Ok(match object.get("backend_host") {
        Some(Value::String(host)) => host.clone(),
        Some(Value::Null) => "None".to_string(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(other) => other.to_string(),
        None => UNKNOWN_HOST.to_string(),
    })
}
