//! Configuration schema definitions.
//!
//! Both services share one configuration structure; the backend simply
//! ignores the `upstream` section. All types derive Serde traits for
//! deserialization from TOML files.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

/// Port the backend service listens on unless configured otherwise.
pub const DEFAULT_BACKEND_PORT: u16 = 5501;

/// Port the frontend service listens on unless configured otherwise.
pub const DEFAULT_FRONTEND_PORT: u16 = 5500;

/// Which of the two services a process is running as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceRole {
    Backend,
    Frontend,
}

impl ServiceRole {
    /// Short name used in logs and metric labels.
    pub fn name(&self) -> &'static str {
        match self {
            ServiceRole::Backend => "backend",
            ServiceRole::Frontend => "frontend",
        }
    }

    /// Port used when the config sets none.
    pub fn default_port(&self) -> u16 {
        match self {
            ServiceRole::Backend => DEFAULT_BACKEND_PORT,
            ServiceRole::Frontend => DEFAULT_FRONTEND_PORT,
        }
    }
}

impl fmt::Display for ServiceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Root configuration for either service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind host and port).
    pub listener: ListenerConfig,

    /// Outbound call to the backend (frontend only).
    pub upstream: UpstreamConfig,

    /// Inbound request timeouts.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind host, an IP address or a host name.
    pub host: String,

    /// Bind port. When unset the role's default port is used.
    pub port: Option<u16>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: None,
        }
    }
}

impl ListenerConfig {
    /// Effective port for the given role.
    pub fn port_for(&self, role: ServiceRole) -> u16 {
        self.port.unwrap_or_else(|| role.default_port())
    }

    /// Address string suitable for `TcpListener::bind`.
    ///
    /// IPv6 literals are bracketed; host names are passed through for the
    /// resolver.
    pub fn bind_address(&self, role: ServiceRole) -> String {
        let port = self.port_for(role);
        match self.host.parse::<IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, port).to_string(),
            Err(_) => format!("{}:{}", self.host, port),
        }
    }
}

/// Upstream (backend) call configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Full URL of the backend info endpoint.
    pub backend_url: String,

    /// Total timeout for the backend call in seconds.
    pub timeout_secs: u64,

    /// Honor `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` for the backend call.
    pub use_system_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            backend_url: format!("http://localhost:{}/info", DEFAULT_BACKEND_PORT),
            timeout_secs: 3,
            use_system_proxy: true,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time to produce a response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 10 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` directive). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
