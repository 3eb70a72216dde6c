//! Shared utilities for integration testing.

use std::net::SocketAddr;

use chess_backend::{HttpServer, Shutdown};
use tokio::net::TcpListener;

/// Spawn a server on an ephemeral loopback port.
///
/// The listener is bound before the task is spawned, so the server is
/// accepting connections by the time this returns. Keep the returned
/// `Shutdown` alive for the duration of the test and trigger it at the end.
pub async fn spawn_server(server: HttpServer) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Client with connection pooling disabled for test isolation.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
