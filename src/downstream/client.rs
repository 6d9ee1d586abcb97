//! HTTP client for the computation service.

use std::time::Duration;

use serde_json::{json, Value};
use url::Url;

use crate::config::DownstreamConfig;
use crate::downstream::types::{ComputeError, ComputeOutcome};

/// Client for the analytics computation service.
///
/// Cheap to clone; all handlers share one connection pool.
#[derive(Clone)]
pub struct ComputeClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ComputeClient {
    /// Build a client from the downstream configuration.
    pub fn new(config: &DownstreamConfig) -> Result<Self, ComputeError> {
        let endpoint = analyze_endpoint(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(ComputeError::Client)?;

        Ok(Self { http, endpoint })
    }

    /// Forward a validated returns sequence to the computation service.
    ///
    /// One attempt, bounded by the configured timeouts. An `Ok` value means
    /// the service was reached and replied with JSON; whether that reply was
    /// a success or a service-reported failure is in the [`ComputeOutcome`].
    pub async fn analyze(&self, returns: &[f64]) -> Result<ComputeOutcome, ComputeError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&json!({ "returns": returns }))
            .send()
            .await
            .map_err(ComputeError::Transport)?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(ComputeError::MalformedResponse)?;

        if status.is_success() {
            Ok(ComputeOutcome::Success(body))
        } else {
            Ok(ComputeOutcome::Failure {
                status,
                details: body,
            })
        }
    }
}

fn analyze_endpoint(base_url: &str) -> Result<Url, ComputeError> {
    let raw = format!("{}/analyze", base_url.trim_end_matches('/'));
    Url::parse(&raw).map_err(|source| ComputeError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_analyze_path() {
        let url = analyze_endpoint("http://127.0.0.1:5001").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5001/analyze");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let url = analyze_endpoint("http://analytics.internal:9000/").unwrap();
        assert_eq!(url.as_str(), "http://analytics.internal:9000/analyze");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = analyze_endpoint("not a url").unwrap_err();
        assert!(matches!(err, ComputeError::InvalidBaseUrl { .. }));
    }
}
