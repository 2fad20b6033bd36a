use crate::config::SERVICE_NAME;
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// Startup refuses to run without a model, so a live process is healthy.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and loaded model summary")
    ),
    tag = "Observability"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.predictor.model_summary(),
    }))
}
