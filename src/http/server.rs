//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create Axum Router with the `/info` and `/analyze` handlers
//! - Wire up middleware (tracing, CORS, timeout, body limit, request ID)
//! - Validate inbound payloads at the boundary
//! - Forward validated requests to the computation service
//! - Translate downstream outcomes into the caller-facing contract
//! - Observability (metrics, request IDs)

use std::time::{Duration, Instant};

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Request, State},
    http::HeaderValue,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::downstream::{ComputeClient, ComputeError, ComputeOutcome};
use crate::http::error::GatewayError;
use crate::http::request::AnalyticsRequest;
use crate::http::response::{AnalyticsEnvelope, ServiceInfo};
use crate::observability::metrics;

/// Application state injected into handlers.
///
/// Immutable after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub compute: ComputeClient,
}

/// HTTP server for the analytics gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, ComputeError> {
        let compute = ComputeClient::new(&config.downstream)?;
        let state = AppState { compute };
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/info", get(info_handler))
            .route("/analyze", post(analyze_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeUuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(CorsLayer::permissive())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(DefaultBodyLimit::max(config.security.max_body_size)),
            )
            .layer(middleware::from_fn(track_requests))
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Stamps a UUID v4 onto each request as `x-request-id`.
#[derive(Clone, Copy, Default)]
struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&uuid::Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// `GET /info`: fixed descriptive document.
async fn info_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

/// `POST /analyze`: validate, forward, translate.
///
/// The only suspension point is the downstream call. Every request resolves
/// to exactly one of: success envelope, invalid input, downstream failure,
/// transport failure.
async fn analyze_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let request = AnalyticsRequest::parse(&body)?;
    let input_count = request.returns.len();

    tracing::debug!(input_count, "Forwarding analytics request");

    match state.compute.analyze(&request.returns).await {
        Ok(ComputeOutcome::Success(analytics)) => {
            Ok(Json(AnalyticsEnvelope::new(input_count, analytics)).into_response())
        }
        Ok(ComputeOutcome::Failure { status, details }) => {
            tracing::warn!(status = %status, "Computation service reported failure");
            Err(GatewayError::DownstreamFailure { status, details })
        }
        Err(e) => {
            tracing::error!(error = %e, "Computation service call failed");
            Err(GatewayError::TransportFailure(e.to_string()))
        }
    }
}

/// Record method, path, status, and latency for every request.
async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    metrics::record_request(&method, &path, response.status().as_u16(), start);
    response
}
