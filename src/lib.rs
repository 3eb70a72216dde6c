//! Chess backend HTTP bootstrap.
//!
//! Wires the middleware chain (structured request logging, panic recovery,
//! CORS) around an axum route table and exposes the placeholder endpoint.
//! Game logic, state and real-time transport attach behind the same chain
//! in later phases.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::BackendConfig;
pub use http::{register_routes, HttpServer};
pub use lifecycle::Shutdown;
