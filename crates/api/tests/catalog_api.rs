//! Integration tests for the style and feeling catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_offline_app, get};

#[tokio::test]
async fn list_styles_returns_every_style_with_tier() {
    let response = get(build_offline_app(), "/api/v1/styles").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let styles = json["data"].as_array().unwrap();
    assert_eq!(styles.len(), atelier_core::catalog().styles().len());

    let popart = styles.iter().find(|s| s["id"] == "popart").unwrap();
    assert_eq!(popart["name"], "Pop Art");
    assert_eq!(popart["free"], true);
    assert_eq!(popart["iconic"]["maxHues"], 5);
}

#[tokio::test]
async fn free_filter_returns_only_free_styles() {
    let response = get(build_offline_app(), "/api/v1/styles?free=true").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let styles = json["data"].as_array().unwrap();
    assert_eq!(styles.len(), atelier_core::catalog::FREE_STYLE_IDS.len());
    assert!(styles.iter().all(|s| s["free"] == true));
}

#[tokio::test]
async fn get_style_by_id() {
    let response = get(build_offline_app(), "/api/v1/styles/bauhaus").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Bauhaus");
    assert_eq!(json["data"]["free"], false);
    assert!(json["data"]["edgeRule"].is_string());
}

#[tokio::test]
async fn get_unknown_style_is_404() {
    let response = get(build_offline_app(), "/api/v1/styles/not-a-real-style").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "STYLE_NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("not-a-real-style"));
}

#[tokio::test]
async fn list_feelings() {
    let response = get(build_offline_app(), "/api/v1/feelings").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let feelings = json["data"].as_array().unwrap();
    assert!(feelings.iter().any(|f| f["id"] == "serene"));
}
