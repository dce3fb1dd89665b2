//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields, never formatted strings, for machine parsing
//! - Request ID flows through the trace layer span
//! - Metrics are cheap (atomic increments) and a no-op without a recorder

pub mod logging;
pub mod metrics;
