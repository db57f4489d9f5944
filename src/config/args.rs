//! Command-line and environment arguments shared by both binaries.
//!
//! clap reads each flag from its environment variable when the flag itself
//! is absent, so flags win over the environment and both win over the file.

use std::path::PathBuf;

use clap::Args;

use crate::config::loader::ConfigOverrides;
use crate::config::schema::LogFormat;

/// Listener and logging arguments common to both services.
#[derive(Debug, Clone, Args)]
pub struct ServiceArgs {
    /// Optional TOML configuration file
    #[arg(short, long, env = "RELAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bind address
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Bind port
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Log filter directive
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, env = "LOG_FORMAT")]
    pub log_format: Option<LogFormat>,
}

/// Arguments for the frontend's call to the backend.
#[derive(Debug, Clone, Args)]
pub struct UpstreamArgs {
    /// URL of the backend info endpoint
    #[arg(long, env = "BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Backend call timeout in seconds
    #[arg(long, env = "BACKEND_TIMEOUT_SECS")]
    pub backend_timeout_secs: Option<u64>,
}

impl ServiceArgs {
    /// Collect the overrides, folding in upstream arguments when given.
    pub fn overrides(&self, upstream: Option<&UpstreamArgs>) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            backend_url: upstream.and_then(|u| u.backend_url.clone()),
            timeout_secs: upstream.and_then(|u| u.backend_timeout_secs),
            log_level: self.log_level.clone(),
            log_format: self.log_format,
        }
    }
}
