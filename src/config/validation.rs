//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, port non-zero)
//! - Check that addresses and URLs parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Upstream settings are only checked for the frontend role
//! - Runs before config is accepted into the system

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

use crate::config::schema::{ServiceConfig, ServiceRole};

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.port must be non-zero")]
    ZeroPort,

    #[error("listener.host {0:?} is neither an IP address nor a host name")]
    InvalidHost(String),

    #[error("upstream.backend_url {url:?} is invalid: {reason}")]
    InvalidBackendUrl { url: String, reason: String },

    #[error("upstream.timeout_secs must be greater than zero")]
    ZeroUpstreamTimeout,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("timeouts.request_secs ({request_secs}) must exceed upstream.timeout_secs ({upstream_secs})")]
    RequestTimeoutNotAboveUpstream { request_secs: u64, upstream_secs: u64 },

    #[error("observability.metrics_address {0:?} is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration for the given role.
pub fn validate_config(config: &ServiceConfig, role: ServiceRole) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == Some(0) {
        errors.push(ValidationError::ZeroPort);
    }

    let host = config.listener.host.as_str();
    if host.parse::<IpAddr>().is_err() && url::Host::parse(host).is_err() {
        errors.push(ValidationError::InvalidHost(host.to_string()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if role == ServiceRole::Frontend {
        if let Err(reason) = check_backend_url(&config.upstream.backend_url) {
            errors.push(ValidationError::InvalidBackendUrl {
                url: config.upstream.backend_url.clone(),
                reason,
            });
        }
        if config.upstream.timeout_secs == 0 {
            errors.push(ValidationError::ZeroUpstreamTimeout);
        }
        // A slow backend must surface as 502, never as the inbound 408.
        if config.timeouts.request_secs != 0
            && config.timeouts.request_secs <= config.upstream.timeout_secs
        {
            errors.push(ValidationError::RequestTimeoutNotAboveUpstream {
                request_secs: config.timeouts.request_secs,
                upstream_secs: config.upstream.timeout_secs,
            });
        }
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_backend_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme {other:?}")),
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid_for_both_roles() {
        let config = ServiceConfig::default();
        assert!(validate_config(&config, ServiceRole::Backend).is_ok());
        assert!(validate_config(&config, ServiceRole::Frontend).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = ServiceConfig::default();
        config.listener.port = Some(0);
        config.upstream.timeout_secs = 0;
        config.upstream.backend_url = "ftp://example.com/info".into();

        let errors = validate_config(&config, ServiceRole::Frontend).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroPort));
        assert!(errors.contains(&ValidationError::ZeroUpstreamTimeout));
        assert!(matches!(
            errors.iter().find(|e| matches!(e, ValidationError::InvalidBackendUrl { .. })),
            Some(ValidationError::InvalidBackendUrl { reason, .. }) if reason.contains("ftp")
        ));
    }

    #[test]
    fn test_backend_ignores_upstream_section() {
        let mut config = ServiceConfig::default();
        config.upstream.backend_url = "not a url".into();
        config.upstream.timeout_secs = 0;
        assert!(validate_config(&config, ServiceRole::Backend).is_ok());
        assert!(validate_config(&config, ServiceRole::Frontend).is_err());
    }

    #[test]
    fn test_request_timeout_must_exceed_upstream_timeout() {
        let mut config = ServiceConfig::default();
        config.timeouts.request_secs = 1;
        config.upstream.timeout_secs = 3;
        assert_eq!(
            validate_config(&config, ServiceRole::Frontend),
            Err(vec![ValidationError::RequestTimeoutNotAboveUpstream {
                request_secs: 1,
                upstream_secs: 3,
            }])
        );

        config.timeouts.request_secs = 3;
        assert!(validate_config(&config, ServiceRole::Frontend).is_err());

        config.timeouts.request_secs = 4;
        assert!(validate_config(&config, ServiceRole::Frontend).is_ok());
    }

    #[test]
    fn test_backend_has_no_upstream_timeout_ordering() {
        let mut config = ServiceConfig::default();
        config.timeouts.request_secs = 1;
        config.upstream.timeout_secs = 30;
        assert!(validate_config(&config, ServiceRole::Backend).is_ok());
    }

    #[test]
    fn test_rejects_bad_host() {
        let mut config = ServiceConfig::default();
        config.listener.host = "bad host name".into();
        assert_eq!(
            validate_config(&config, ServiceRole::Backend),
            Err(vec![ValidationError::InvalidHost("bad host name".into())])
        );
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config, ServiceRole::Backend).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config, ServiceRole::Backend),
            Err(vec![ValidationError::InvalidMetricsAddress("nowhere".into())])
        );
    }
}
