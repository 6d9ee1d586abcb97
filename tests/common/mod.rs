//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;

use analytics_gateway::config::GatewayConfig;
use analytics_gateway::http::HttpServer;
use analytics_gateway::lifecycle::Shutdown;

/// Start a mock computation service whose `/analyze` behavior is supplied
/// by the test. Binds an ephemeral port and returns the address.
pub async fn start_mock_compute<F, Fut, R>(handler: F) -> SocketAddr
where
    F: Fn() -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + 'static,
{
    let app = Router::new()
        .route("/analyze", post(move || handler()))
        .route(
            "/health",
            get(|| async { Json(json!({ "status": "ok" })) }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Start a gateway pointed at the given downstream base URL.
///
/// Returns the gateway's base URL and the shutdown handle; tests trigger
/// shutdown when done.
pub async fn spawn_gateway(downstream_base: &str) -> (String, Shutdown) {
    let mut config = GatewayConfig::default();
    config.downstream.base_url = downstream_base.to_string();
    config.downstream.request_timeout_secs = 2;
    config.downstream.connect_timeout_secs = 1;
    config.health_check.enabled = false;
    config.observability.metrics_enabled = false;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{}", addr), shutdown)
}
