use crate::dtos::{PredictRequest, PredictResponse};
use crate::models::Sex;
use crate::services::PredictionInput;
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// Predict stunting status for one child.
#[utoipa::path(
    post,
    path = "/predict",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Predicted status with per-class percentages", body = PredictResponse),
        (status = 400, description = "Unknown jenis_kelamin or malformed JSON"),
        (status = 422, description = "Missing field, wrong type or value out of range"),
        (status = 500, description = "Model could not produce a prediction")
    ),
    tag = "Prediction"
)]
pub async fn predict(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let sex: Sex = req
        .jenis_kelamin
        .parse()
        .map_err(|e| AppError::BadRequest(anyhow::Error::new(e)))?;

    // Range validated to 1..=60 above.
    let age_months = u32::try_from(req.usia)
        .map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?;

    let input = PredictionInput {
        sex,
        age_months,
        height_cm: req.tinggi_badan,
    };

    let prediction = state
        .predictor
        .predict(&input)
        .map_err(|e| AppError::PredictionFailed(anyhow::Error::new(e)))?;

    Ok(Json(PredictResponse {
        jenis_kelamin: req.jenis_kelamin,
        usia: req.usia,
        tinggi_badan: req.tinggi_badan,
        hasil_prediksi: prediction.label,
        keterangan: prediction.description.to_string(),
        probabilitas: prediction.probabilities,
    }))
}
