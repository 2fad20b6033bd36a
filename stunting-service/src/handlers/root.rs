use crate::dtos::RootResponse;
use axum::Json;

pub const ROOT_MESSAGE: &str = "API Prediksi Stunting Aktif";

/// Liveness payload.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = RootResponse)
    ),
    tag = "Observability"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}
