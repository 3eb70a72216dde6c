//! Lifecycle management subsystem.
//!
//! Startup lives in `main.rs` (config first, then observability, then the
//! listener); this module owns the shutdown side.

pub mod shutdown;

pub use shutdown::Shutdown;
