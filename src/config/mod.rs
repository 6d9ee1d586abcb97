//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (environment overrides: PORT, PYTHON_BASE_URL)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared with the server and health monitor
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; there is no hot reload
//! - All fields have defaults so an empty config works out of the box
//! - Validation separates syntactic (serde) from semantic checks
//! - Environment variables win over file values

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::DownstreamConfig;
pub use schema::GatewayConfig;
pub use schema::HealthCheckConfig;
pub use schema::ListenerConfig;
