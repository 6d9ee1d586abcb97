//! Downstream health probing.
//!
//! Observational only: the monitor logs availability transitions and keeps
//! the `gateway_downstream_up` gauge current. It never gates request
//! handling; a request against a down computation service still goes out
//! and fails on its own terms.

pub mod monitor;

pub use monitor::HealthMonitor;
