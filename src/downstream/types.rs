//! Computation service outcome and error definitions.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Capability tag stamped on every success envelope.
pub const SOURCE_TAG: &str = "python-analytics";

/// What the computation service said, when it could be reached and parsed.
#[derive(Debug, Clone)]
pub enum ComputeOutcome {
    /// 2xx reply; the payload is opaque to the gateway.
    Success(Value),

    /// The service reported a failure. Status and body are propagated
    /// to the caller unchanged.
    Failure { status: StatusCode, details: Value },
}

/// Failures of the invocation itself, as opposed to failures the
/// computation service reported.
#[derive(Debug, Error)]
pub enum ComputeError {
    /// Invalid base URL in configuration.
    #[error("invalid computation service URL `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    /// HTTP client construction failed.
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    /// Connection refused, timeout, or other transport-level failure.
    #[error("computation service unreachable: {0}")]
    Transport(reqwest::Error),

    /// The service replied, but not with JSON.
    #[error("computation service returned a malformed response: {0}")]
    MalformedResponse(reqwest::Error),
}
