//! Route handlers.
//!
//! Only the placeholder endpoint exists right now; game endpoints (move
//! submission, game lookup) will attach alongside it via `HttpServer::route`.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::http::server::AppState;

/// Body of the placeholder response.
#[derive(Debug, Clone, Serialize)]
pub struct HelloResponse {
    pub message: String,
}

/// `GET /` — placeholder until the chess engine endpoints land.
pub async fn hello_world(State(state): State<AppState>) -> Json<HelloResponse> {
    Json(HelloResponse {
        message: state.hello.message.clone(),
    })
}
