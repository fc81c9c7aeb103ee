#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use atelier_api::config::ServerConfig;
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;
use atelier_events::ActionBus;
use atelier_remote::RemoteApi;

pub const GOOD_TOKEN: &str = "good-token";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(remote_api_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        remote_api_url: remote_api_url.to_string(),
    }
}

/// Build the full application router, pointed at `remote_api_url`, using
/// the same middleware stack as production. Also returns the action bus so
/// tests can observe dispatched analytics.
pub fn build_test_app(remote_api_url: &str) -> (Router, Arc<ActionBus>) {
    let config = test_config(remote_api_url);
    let action_bus = Arc::new(ActionBus::default());

    let state = AppState {
        catalog: atelier_core::catalog(),
        remote: Arc::new(RemoteApi::new(remote_api_url)),
        action_bus: Arc::clone(&action_bus),
    };

    (build_app_router(state, &config), action_bus)
}

/// App whose remote API is unreachable; fine for routes that never call it.
pub fn build_offline_app() -> Router {
    build_test_app("http://127.0.0.1:9").0
}

/// Start a stub remote poster API on an ephemeral port and return its URL.
pub async fn spawn_remote_stub() -> String {
    fn authorized(headers: &axum::http::HeaderMap) -> bool {
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == format!("Bearer {GOOD_TOKEN}"))
    }

    let app = Router::new()
        .route(
            "/creations",
            post(
                |headers: axum::http::HeaderMap, Json(body): Json<Value>| async move {
                    if !authorized(&headers) {
                        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "expired" })));
                    }
                    let prompt = body["prompt"].as_str().unwrap_or_default();
                    if !prompt.contains("STYLE TRANSFER") {
                        return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "error": "bad prompt" })));
                    }
                    (
                        StatusCode::ACCEPTED,
                        Json(json!({
                            "creation_id": "c_42",
                            "status": "queued",
                            "image_url": null,
                        })),
                    )
                },
            ),
        )
        .route(
            "/partner/metrics",
            axum::routing::get(|headers: axum::http::HeaderMap| async move {
                if !authorized(&headers) {
                    return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "expired" })));
                }
                (
                    StatusCode::OK,
                    Json(json!({ "views": 400, "saves": 100, "orders": 20, "revenue_cents": 50_000 })),
                )
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value, token: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
