use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /predict`.
///
/// Field ranges are checked here. `jenis_kelamin` is only checked when it is
/// parsed into [`crate::models::Sex`], so an unknown value yields a 400 rather
/// than a 422.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct PredictRequest {
    /// `laki-laki` or `perempuan`, any casing.
    #[schema(example = "laki-laki")]
    pub jenis_kelamin: String,

    /// Age in months.
    #[validate(range(min = 1, max = 60, message = "usia must be between 1 and 60 months"))]
    #[schema(example = 24)]
    pub usia: i64,

    /// Height in centimetres, exclusive bounds.
    #[validate(range(
        exclusive_min = 30.0,
        exclusive_max = 150.0,
        message = "tinggi_badan must be greater than 30 and less than 150 cm"
    ))]
    #[schema(example = 80.0)]
    pub tinggi_badan: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PredictResponse {
    /// Echoed exactly as sent.
    #[schema(example = "laki-laki")]
    pub jenis_kelamin: String,
    #[schema(example = 24)]
    pub usia: i64,
    #[schema(example = 80.0)]
    pub tinggi_badan: f64,
    #[schema(example = "stunted")]
    pub hasil_prediksi: String,
    #[schema(example = "⚠ Pendek (indikasi stunting, perlu pemantauan gizi)")]
    pub keterangan: String,
    /// Percentage per class label, `null` when the model has no probabilities.
    #[schema(example = json!({"normal": 40.0, "severely stunted": 0.0, "stunted": 60.0, "tinggi": 0.0}))]
    pub probabilitas: Option<BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "API Prediksi Stunting Aktif")]
    pub message: String,
}
