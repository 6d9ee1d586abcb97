//! Analytics request-bridging gateway library.

pub mod config;
pub mod downstream;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
