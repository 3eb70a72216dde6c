//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware chain)
//!     → request.rs (stamp request ID)
//!     → middleware/ (logging, recovery, CORS)
//!     → handlers.rs (route handlers)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{register_routes, AppState, HttpServer};
