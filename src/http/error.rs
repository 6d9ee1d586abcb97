//! Gateway error taxonomy and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Every failure the gateway can report to a caller.
///
/// Each variant is terminal for its request and maps 1:1 to a status and a
/// JSON body. Callers never see an unstructured failure.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The caller's payload failed structural validation. Never retried,
    /// never forwarded.
    #[error("{0}")]
    InvalidInput(String),

    /// The computation service reported a failure. Its status and body are
    /// passed through unchanged.
    #[error("computation service reported status {status}")]
    DownstreamFailure { status: StatusCode, details: Value },

    /// The gateway could not complete the downstream call or parse its
    /// response.
    #[error("computation service call failed: {0}")]
    TransportFailure(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::InvalidInput(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            GatewayError::DownstreamFailure { status, details } => (
                status,
                Json(json!({
                    "error": "Python service error",
                    "details": details,
                })),
            )
                .into_response(),
            GatewayError::TransportFailure(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Server error while calling Python service",
                    "details": details,
                })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_400() {
        let response = GatewayError::InvalidInput("nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn downstream_failure_propagates_status() {
        let response = GatewayError::DownstreamFailure {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            details: json!({ "error": "bad returns" }),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn transport_failure_maps_to_500() {
        let response = GatewayError::TransportFailure("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
