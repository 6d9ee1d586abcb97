//! Analytics Gateway
//!
//! A request-bridging gateway built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │               ANALYTICS GATEWAY              │
//!                      │                                              │
//!   Client Request     │  ┌─────────┐   ┌────────────┐   ┌─────────┐ │
//!   ──────────────────►│  │  http   │──►│ validation │──►│downstream│─┼──► Computation
//!                      │  │ server  │   │ (request)  │   │  client │ │        Service
//!                      │  └─────────┘   └────────────┘   └────┬────┘ │      (Python)
//!                      │                                      │      │
//!   Client Response    │  ┌──────────────────────────┐        │      │
//!   ◄──────────────────┼──│ translation (response /  │◄───────┘      │
//!                      │  │ error taxonomy)          │               │
//!                      │  └──────────────────────────┘               │
//!                      │                                              │
//!                      │  ┌────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns        │ │
//!                      │  │  config · health probe · observability │ │
//!                      │  │            · lifecycle                 │ │
//!                      │  └────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;

use analytics_gateway::config::loader::resolve_config;
use analytics_gateway::health::HealthMonitor;
use analytics_gateway::http::HttpServer;
use analytics_gateway::lifecycle::Shutdown;
use analytics_gateway::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config()?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "analytics-gateway starting"
    );
    tracing::info!(
        bind_address = %config.listener.bind_address,
        downstream = %config.downstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.spawn_signal_listener();

    if config.health_check.enabled {
        let monitor = HealthMonitor::new(&config.downstream, config.health_check.clone())?;
        let monitor_shutdown = shutdown.subscribe();
        tokio::spawn(async move {
            monitor.run(monitor_shutdown).await;
        });
    }

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
