//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (Axum setup, middleware, handlers)
//!     → request.rs (parse body, structural validation)
//!     → [downstream client invokes the computation service]
//!     → response.rs (wrap result in the success envelope)
//!     → error.rs (map failures to status + JSON body)
//! ```

pub mod error;
pub mod request;
pub mod response;
pub mod server;

pub use error::GatewayError;
pub use server::HttpServer;
