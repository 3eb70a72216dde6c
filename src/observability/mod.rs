//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handling produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counter, latency histogram)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging carries the request ID through every event
//! - Metric updates are cheap (atomic increments)
//! - The Prometheus exporter is off by default; the bootstrap has a single
//!   route and logging alone is usually enough in development

pub mod logging;
pub mod metrics;
