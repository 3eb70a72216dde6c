//! Chess backend server (bootstrap phase).
//!
//! # Architecture Overview
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                CHESS BACKEND                 │
//!                  │                                              │
//!  Client Request  │  ┌────────────┐   ┌───────────┐   ┌───────┐ │
//!  ────────────────┼─▶│ request ID │──▶│ logging   │──▶│ panic │ │
//!                  │  └────────────┘   └───────────┘   │recovery│ │
//!                  │                                    └───┬───┘ │
//!                  │                                        ▼     │
//!  Client Response │  ┌────────────┐   ┌───────────┐   ┌───────┐ │
//!  ◀───────────────┼──│  handlers  │◀──│  metrics  │◀──│ CORS  │ │
//!                  │  └────────────┘   └───────────┘   └───────┘ │
//!                  │                                              │
//!                  │  Cross-cutting: config, observability,       │
//!                  │                 lifecycle                    │
//!                  └──────────────────────────────────────────────┘
//! ```
//!
//! # Bootstrap Status
//!
//! Single placeholder route (`GET /`). Game endpoints, matchmaking and
//! move propagation attach behind the same middleware chain later.

use tokio::net::TcpListener;

use chess_backend::config::loader;
use chess_backend::lifecycle::Shutdown;
use chess_backend::observability::{logging, metrics};
use chess_backend::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults unless CHESS_BACKEND_CONFIG names a file)
    let config = loader::load_or_default()?;

    logging::init_tracing(&config.observability);

    tracing::info!("chess-backend v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        cors_origins = ?config.cors.allowed_origins,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    // Optional Prometheus exporter on its own listener
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
