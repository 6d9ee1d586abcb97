//! Stand-in computation service for local development.
//!
//! Implements the same contract as the Python analytics service so the
//! gateway can be run end-to-end without it: `GET /health` plus
//! `POST /analyze` returning average return, population volatility, and a
//! scaled risk score.

use std::net::SocketAddr;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

#[tokio::main]
async fn main() {
    let port = std::env::var("MOCK_COMPUTE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5001u16);

    let app = Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze));

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("Mock computation service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "python-analytics" }))
}

async fn analyze(Json(payload): Json<Value>) -> impl IntoResponse {
    let returns = match numeric_array(&payload) {
        Some(returns) => returns,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "`returns` must be an array of numbers." })),
            )
                .into_response()
        }
    };

    if returns.len() < 2 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Provide at least 2 return values." })),
        )
            .into_response();
    }

    let avg = mean(&returns);
    let volatility = population_stdev(&returns);
    let risk_score = (volatility * 1000.0).clamp(0.0, 100.0);
    let processed_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(json!({
        "avg_return": avg,
        "volatility": volatility,
        "risk_score": risk_score,
        "processed_at": processed_at,
    }))
    .into_response()
}

fn numeric_array(payload: &Value) -> Option<Vec<f64>> {
    payload
        .get("returns")?
        .as_array()?
        .iter()
        .map(Value::as_f64)
        .collect()
}

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

fn population_stdev(xs: &[f64]) -> f64 {
    let avg = mean(xs);
    let variance = xs.iter().map(|x| (x - avg).powi(2)).sum::<f64>() / xs.len() as f64;
    variance.sqrt()
}
