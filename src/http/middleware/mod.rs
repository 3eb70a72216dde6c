//! Cross-cutting request middleware.
//!
//! Layers are assembled by `http::server`; the request-flow order is fixed:
//! request ID → logger → recovery → CORS → handlers.

pub mod cors;
pub mod recovery;

pub use cors::cors_layer;
pub use recovery::recovery_layer;
