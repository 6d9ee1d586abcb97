//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Resolve config → Validate → Init observability → Bind listener → Serve
//!
//! Shutdown:
//!     Ctrl+C (or test trigger) → broadcast → server drains, monitor exits
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
