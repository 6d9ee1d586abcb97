//! Caller-facing response shapes.

use serde::Serialize;
use serde_json::Value;

use crate::downstream::SOURCE_TAG;

/// Success envelope wrapped around a computation service result.
///
/// `analytics` is attached unmodified; the gateway adds only the
/// contextual metadata around it.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsEnvelope {
    /// Number of observations in the submitted sequence.
    pub input_count: usize,

    /// Opaque result payload from the computation service.
    pub analytics: Value,

    /// Which capability produced the result.
    pub source: &'static str,
}

impl AnalyticsEnvelope {
    pub fn new(input_count: usize, analytics: Value) -> Self {
        Self {
            input_count,
            analytics,
            source: SOURCE_TAG,
        }
    }
}

/// Static document served by `GET /info`. Input-independent.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub purpose: &'static str,
    pub endpoints: EndpointMap,
    pub stack: [&'static str; 5],
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointMap {
    pub info: &'static str,
    pub analyze: &'static str,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            name: "analytics-gateway",
            purpose: "Bridges analytics requests to the Python computation service",
            endpoints: EndpointMap {
                info: "GET /info",
                analyze: "POST /analyze  { returns: number[] }",
            },
            stack: ["Rust", "Axum", "Tokio", "Python", "Flask"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_serializes_to_contract_shape() {
        let envelope = AnalyticsEnvelope::new(8, json!({ "risk_score": 0.42 }));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "input_count": 8,
                "analytics": { "risk_score": 0.42 },
                "source": "python-analytics",
            })
        );
    }

    #[test]
    fn info_document_is_stable() {
        let a = serde_json::to_value(ServiceInfo::current()).unwrap();
        let b = serde_json::to_value(ServiceInfo::current()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a["name"], "analytics-gateway");
        assert_eq!(a["endpoints"]["analyze"], "POST /analyze  { returns: number[] }");
    }
}
