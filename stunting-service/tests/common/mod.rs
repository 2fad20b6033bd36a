//! Shared helpers for stunting-service integration tests.
//!
//! Tests drive the router in-process against the JSON fixtures in
//! `tests/fixtures`.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::path::PathBuf;
use stunting_service::classifier::ModelArtifact;
use stunting_service::config::{
    CorsConfig, ModelConfig, ObservabilityConfig, StuntingConfig,
};
use stunting_service::startup::{build_router, AppState};
use tower::ServiceExt;

pub const ENCODER: &str = "gender_encoder.json";
pub const MALE_ONLY_ENCODER: &str = "gender_encoder_male_only.json";

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn model_config(encoder_file: &str) -> ModelConfig {
    ModelConfig {
        dir: fixtures_dir(),
        model_file: "knn_model.json".to_string(),
        encoder_file: encoder_file.to_string(),
    }
}

pub fn test_config(model: ModelConfig) -> StuntingConfig {
    StuntingConfig {
        common: service_core::config::Config { port: 0 },
        model,
        observability: ObservabilityConfig {
            log_level: "debug".to_string(),
            otlp_endpoint: None,
        },
        cors: CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
    }
}

pub fn router_with_encoder(encoder_file: &str) -> Router {
    let artifact =
        ModelArtifact::load(&model_config(encoder_file)).expect("Failed to load fixtures");
    build_router(
        AppState::new(artifact),
        &CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
    )
}

pub fn test_router() -> Router {
    router_with_encoder(ENCODER)
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Send one request and decode the JSON body.
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
