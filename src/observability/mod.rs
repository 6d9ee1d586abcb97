//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms, gauges)
//!
//! Consumers:
//!     → stdout (structured logs)
//!     → Prometheus scrape endpoint (metrics)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through log events via the tracing middleware
//! - Metric updates are cheap and never fail the request path
//! - The exporter listens on its own address, away from caller traffic

pub mod logging;
pub mod metrics;
