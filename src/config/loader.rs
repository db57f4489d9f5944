//! Configuration loading: defaults, optional TOML file, then overrides.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{LogFormat, ServiceConfig, ServiceRole};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values supplied by the environment or the command line.
///
/// Every field that is `Some` replaces the file/default value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub backend_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

impl ConfigOverrides {
    /// Write every set field into `config`.
    pub fn apply(&self, config: &mut ServiceConfig) {
        if let Some(host) = &self.host {
            config.listener.host = host.clone();
        }
        if let Some(port) = self.port {
            config.listener.port = Some(port);
        }
        if let Some(url) = &self.backend_url {
            config.upstream.backend_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.upstream.timeout_secs = secs;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.observability.log_format = format;
        }
    }
}

/// Parse a TOML document into a configuration without validating it.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Build, override and validate the configuration for `role`.
pub fn load_config(
    role: ServiceRole,
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_config(&content)?
        }
        None => ServiceConfig::default(),
    };

    overrides.apply(&mut config);
    validate_config(&config, role).map_err(ConfigError::Validation)?;

    Ok(config)
}
