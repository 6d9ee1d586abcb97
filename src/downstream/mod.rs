//! Computation service client subsystem.
//!
//! # Data Flow
//! ```text
//! validated returns sequence
//!     → client.rs (POST <base>/analyze, single attempt, bounded wait)
//!     → ComputeOutcome::Success(body)           on 2xx
//!     → ComputeOutcome::Failure{status, body}   on downstream-reported error
//!     → ComputeError                            when the call itself fails
//! ```
//!
//! # Design Decisions
//! - Exactly one invocation attempt per request; no retry, no backoff
//! - The result payload is opaque: passed through as raw JSON, never
//!   interpreted here
//! - Failure bodies are preserved bit-for-bit for the caller

pub mod client;
pub mod types;

pub use client::ComputeClient;
pub use types::{ComputeError, ComputeOutcome, SOURCE_TAG};
