//! Panic recovery middleware.
//!
//! # Responsibilities
//! - Catch any unwinding panic raised by a handler or inner middleware
//! - Convert it into a generic 500 response so the process keeps serving
//! - Log the panic payload; never leak it to the client

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Layer that converts handler panics into 500 responses.
pub fn recovery_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };

    tracing::error!(panic = %detail, "Handler panicked; request converted to 500");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": "internal server error" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_payload_becomes_generic_500() {
        let response = handle_panic(Box::new("the rooks are on fire".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_string_payload_is_handled() {
        let response = handle_panic(Box::new(42_u64));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
