//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees syntactically.
//! Returns all violations, not just the first, so a broken config can be
//! fixed in one pass.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic violation found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address `{0}`")]
    InvalidBindAddress(String),

    #[error("invalid downstream base URL `{0}`")]
    InvalidDownstreamUrl(String),

    #[error("downstream base URL `{0}` must use http or https")]
    UnsupportedDownstreamScheme(String),

    #[error("invalid metrics address `{0}`")]
    InvalidMetricsAddress(String),

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

/// Validate a resolved configuration, collecting every violation.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.downstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(_) => errors.push(ValidationError::UnsupportedDownstreamScheme(
            config.downstream.base_url.clone(),
        )),
        Err(_) => errors.push(ValidationError::InvalidDownstreamUrl(
            config.downstream.base_url.clone(),
        )),
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.downstream.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration("downstream.request_timeout_secs"));
    }
    if config.downstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration("downstream.connect_timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroDuration("timeouts.request_secs"));
    }
    if config.health_check.enabled && config.health_check.interval_secs == 0 {
        errors.push(ValidationError::ZeroDuration("health_check.interval_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_violation() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.downstream.base_url = "ftp://files.example.com".into();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::InvalidBindAddress(
            "not-an-address".into()
        )));
        assert!(errors.contains(&ValidationError::UnsupportedDownstreamScheme(
            "ftp://files.example.com".into()
        )));
        assert!(errors.contains(&ValidationError::ZeroDuration("timeouts.request_secs")));
    }

    #[test]
    fn rejects_unparseable_downstream_url() {
        let mut config = GatewayConfig::default();
        config.downstream.base_url = "not a url".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidDownstreamUrl("not a url".into())]
        );
    }

    #[test]
    fn metrics_address_only_checked_when_enabled() {
        let mut config = GatewayConfig::default();
        config.observability.metrics_address = "bogus".into();
        config.observability.metrics_enabled = false;
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
