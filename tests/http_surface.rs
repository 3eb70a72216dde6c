//! HTTP surface tests for the bootstrap: placeholder route, CORS headers,
//! concurrent request behavior.

use chess_backend::{BackendConfig, HttpServer};
use futures_util::future::join_all;
use reqwest::StatusCode;

mod common;

const DEFAULT_MESSAGE: &str = "This is a placeholder fo thebackend (engine) for the chess game";

#[tokio::test]
async fn hello_returns_placeholder_json() {
    let server = HttpServer::new(BackendConfig::default());
    let (addr, shutdown) = common::spawn_server(server).await;

    let res = common::client()
        .get(format!("http://{addr}/"))
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "message": DEFAULT_MESSAGE }));

    shutdown.trigger();
}

#[tokio::test]
async fn hello_message_comes_from_config() {
    let mut config = BackendConfig::default();
    config.hello.message = "Jaque mate".into();
    let (addr, shutdown) = common::spawn_server(HttpServer::new(config)).await;

    let body: serde_json::Value = common::client()
        .get(format!("http://{addr}/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "Jaque mate");

    shutdown.trigger();
}

#[tokio::test]
async fn request_headers_do_not_change_the_response() {
    let server = HttpServer::new(BackendConfig::default());
    let (addr, shutdown) = common::spawn_server(server).await;

    let res = common::client()
        .get(format!("http://{addr}/"))
        .header("Accept", "text/html")
        .header("X-CSRF-Token", "abc123")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], DEFAULT_MESSAGE);

    shutdown.trigger();
}

#[tokio::test]
async fn cors_headers_present_for_allowed_origins() {
    let server = HttpServer::new(BackendConfig::default());
    let (addr, shutdown) = common::spawn_server(server).await;
    let client = common::client();

    for origin in ["https://chess.example.com", "http://localhost:5173"] {
        let res = client
            .get(format!("http://{addr}/"))
            .header("Origin", origin)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()["access-control-allow-origin"],
            origin,
            "origin {origin} should be echoed back"
        );
        assert_eq!(res.headers()["access-control-allow-credentials"], "true");
    }

    shutdown.trigger();
}

#[tokio::test]
async fn disallowed_origin_gets_no_cors_headers() {
    let mut config = BackendConfig::default();
    config.cors.allowed_origins = vec!["https://chess.example.com".into()];
    let (addr, shutdown) = common::spawn_server(HttpServer::new(config)).await;

    let res = common::client()
        .get(format!("http://{addr}/"))
        .header("Origin", "https://evil.example.com")
        .send()
        .await
        .unwrap();

    // The request itself still succeeds; the browser enforces the policy
    // based on the missing header.
    assert_eq!(res.status(), StatusCode::OK);
    assert!(!res.headers().contains_key("access-control-allow-origin"));

    shutdown.trigger();
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let server = HttpServer::new(BackendConfig::default());
    let (addr, shutdown) = common::spawn_server(server).await;
    let client = common::client();

    let requests = (0..100).map(|_| {
        let client = client.clone();
        let url = format!("http://{addr}/");
        async move {
            let res = client.get(url).send().await.unwrap();
            assert_eq!(res.status(), StatusCode::OK);
            res.json::<serde_json::Value>().await.unwrap()
        }
    });

    for body in join_all(requests).await {
        assert_eq!(body["message"], DEFAULT_MESSAGE);
    }

    shutdown.trigger();
}
