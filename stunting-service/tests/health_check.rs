//! Root, health and startup tests.

mod common;

use axum::http::StatusCode;
use common::{get, model_config, send, test_config, test_router, ENCODER};
use stunting_service::startup::Application;
use tower::ServiceExt;

#[tokio::test]
async fn root_returns_liveness_message() {
    let (status, body) = send(test_router(), get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"message": "API Prediksi Stunting Aktif"}));
}

#[tokio::test]
async fn health_reports_loaded_model() {
    let (status, body) = send(test_router(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "stunting-service");
    assert_eq!(body["model"]["algorithm"], "knn");
    assert_eq!(body["model"]["n_neighbors"], 5);
    assert_eq!(body["model"]["samples"], 24);
    assert_eq!(
        body["model"]["classes"],
        serde_json::json!(["normal", "severely stunted", "stunted", "tinggi"])
    );
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let response = test_router()
        .oneshot(get("/"))
        .await
        .expect("Request failed");

    let headers = response.headers();
    assert!(headers.contains_key("x-request-id"));
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let request = axum::http::Request::builder()
        .uri("/")
        .header("origin", "https://frontend.example")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = test_router().oneshot(request).await.expect("Request failed");
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn application_builds_with_valid_artifacts() {
    let app = Application::build(test_config(model_config(ENCODER)))
        .await
        .expect("Failed to build application");

    assert_ne!(app.port(), 0);
}

#[tokio::test]
async fn application_refuses_to_start_without_model() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = model_config(ENCODER);
    model.dir = dir.path().to_path_buf();

    let result = Application::build(test_config(model)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn openapi_document_describes_predict() {
    let (status, body) = send(test_router(), get("/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "API Prediksi Stunting Balita");
    assert_eq!(body["info"]["version"], "1.0.0");
    assert!(body["paths"]["/predict"]["post"].is_object());
    assert!(body["paths"]["/"]["get"].is_object());

    let request = &body["components"]["schemas"]["PredictRequest"]["properties"];
    assert_eq!(request["jenis_kelamin"]["example"], "laki-laki");
    assert_eq!(request["usia"]["example"], 24);
    assert_eq!(request["tinggi_badan"]["example"], 80.0);
}
