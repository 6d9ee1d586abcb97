//! Inbound payload parsing and structural validation.
//!
//! Validation here is structural, not semantic: any numeric value is
//! accepted, including negative and zero. Judging the numbers is the
//! computation service's job.

use serde::Deserialize;

use crate::http::error::GatewayError;

/// Minimum number of observations the downstream math can work with.
pub const MIN_RETURNS: usize = 2;

/// The one message every structural failure resolves to.
pub const INVALID_RETURNS_MESSAGE: &str =
    "Provide `returns` as an array with at least 2 numbers.";

/// A validated analytics request.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsRequest {
    /// Ordered sequence of period returns.
    pub returns: Vec<f64>,
}

impl AnalyticsRequest {
    /// Parse and validate a raw request body.
    ///
    /// Pure transform, no side effects. Anything that is not an object with
    /// a numeric-array `returns` of length >= 2 fails with `InvalidInput`.
    pub fn parse(body: &[u8]) -> Result<Self, GatewayError> {
        let request: AnalyticsRequest = serde_json::from_slice(body)
            .map_err(|_| GatewayError::InvalidInput(INVALID_RETURNS_MESSAGE.to_string()))?;

        if request.returns.len() < MIN_RETURNS {
            return Err(GatewayError::InvalidInput(
                INVALID_RETURNS_MESSAGE.to_string(),
            ));
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<AnalyticsRequest, GatewayError> {
        AnalyticsRequest::parse(raw.as_bytes())
    }

    #[test]
    fn accepts_two_or_more_numbers() {
        let request = parse(r#"{"returns":[0.012,-0.004]}"#).unwrap();
        assert_eq!(request.returns, vec![0.012, -0.004]);
    }

    #[test]
    fn accepts_integers_zero_and_negatives() {
        let request = parse(r#"{"returns":[0,-3,7]}"#).unwrap();
        assert_eq!(request.returns, vec![0.0, -3.0, 7.0]);
    }

    #[test]
    fn tolerates_unknown_fields() {
        assert!(parse(r#"{"returns":[0.1,0.2],"note":"ignored"}"#).is_ok());
    }

    #[test]
    fn rejects_single_element() {
        let err = parse(r#"{"returns":[0.01]}"#).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidInput(m) if m == INVALID_RETURNS_MESSAGE));
    }

    #[test]
    fn rejects_empty_array() {
        assert!(parse(r#"{"returns":[]}"#).is_err());
    }

    #[test]
    fn rejects_missing_field() {
        assert!(parse(r#"{}"#).is_err());
    }

    #[test]
    fn rejects_non_array_returns() {
        assert!(parse(r#"{"returns":3}"#).is_err());
    }

    #[test]
    fn rejects_non_numeric_elements() {
        assert!(parse(r#"{"returns":["a","b"]}"#).is_err());
    }

    #[test]
    fn rejects_non_json_body() {
        assert!(parse("definitely not json").is_err());
    }
}
