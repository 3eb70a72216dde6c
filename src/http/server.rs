//! HTTP server bootstrap.
//!
//! # Responsibilities
//! - Register the route table (currently just the placeholder endpoint)
//! - Wire the middleware chain: request ID → logger → recovery → CORS
//! - Materialize an axum `Router` for an external listener to bind
//! - Run the server with graceful shutdown
//!
//! # Design Decisions
//! - Routes are attached to the *inner* router and the middleware chain is
//!   applied once, in `into_router`; a route added later can never bypass
//!   logging, recovery or CORS
//! - The chain order is fixed: the logger wraps everything downstream,
//!   recovery wraps every handler, CORS answers preflights before dispatch
//! - Construction never fails; a config invalid enough to break layer
//!   construction is a startup bug, not a request-time error

use axum::http::Request;
use axum::response::Response;
use axum::routing::{get, MethodRouter};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::{BackendConfig, HelloConfig};
use crate::http::handlers;
use crate::http::middleware::{cors_layer, recovery_layer};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, X_REQUEST_ID};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub hello: HelloConfig,
}

/// HTTP server for the chess backend.
///
/// Holds the un-layered route table; the middleware chain is applied when the
/// router is materialized, so every registered route goes through it.
pub struct HttpServer {
    routes: Router,
    config: BackendConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the default route table.
    pub fn new(config: BackendConfig) -> Self {
        let state = AppState {
            hello: config.hello.clone(),
        };

        let routes = Router::new()
            .route("/", get(handlers::hello_world))
            .with_state(state);

        Self { routes, config }
    }

    /// Attach an additional route behind the same middleware chain.
    ///
    /// Future route groups (game creation, move submission) register here
    /// before the handler is bound to a listener.
    pub fn route(mut self, path: &str, method_router: MethodRouter) -> Self {
        self.routes = self.routes.route(path, method_router);
        self
    }

    /// Materialize the router with the full middleware chain applied.
    ///
    /// Request-flow order (outermost first): request ID → trace/logging →
    /// request ID propagation → panic recovery → CORS → metrics → handler.
    /// Axum layers wrap whatever is already registered, so the innermost
    /// layer is added first.
    pub fn into_router(self) -> Router {
        let trace = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = ?request.headers().get(X_REQUEST_ID),
                )
            })
            .on_response(
                |response: &Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::info!(
                        status = response.status().as_u16(),
                        latency_us = latency.as_micros() as u64,
                        "Request completed"
                    );
                },
            );

        self.routes
            .layer(axum::middleware::from_fn(metrics::track_metrics))
            .layer(cors_layer(&self.config.cors))
            .layer(recovery_layer())
            .layer(propagate_request_id_layer())
            .layer(trace)
            .layer(set_request_id_layer())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Shuts down gracefully on ctrl-c or when `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.into_router())
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Shutdown signal received");
                    }
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown triggered");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the fully configured request handler for an external listener.
///
/// The sole entry point bootstrap code needs: construction is pure and
/// infallible, and every registered route sits behind the logging, recovery
/// and CORS layers.
pub fn register_routes(config: BackendConfig) -> Router {
    HttpServer::new(config).into_router()
}
