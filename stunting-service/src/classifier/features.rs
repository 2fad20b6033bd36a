use super::{LabelEncoder, ModelError};
use crate::models::Sex;
use ndarray::{arr1, Array1};

/// Column names the model was fit on, in order. Artifacts declaring any
/// other order are refused at load time.
pub const FEATURE_NAMES: [&str; 3] = ["Umur (bulan)", "Jenis Kelamin", "Tinggi Badan (cm)"];

/// Encoded model input: age, encoded sex, height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    age_months: f64,
    sex_code: f64,
    height_cm: f64,
}

impl FeatureVector {
    /// The only place model input is assembled.
    pub fn encode(
        sex: Sex,
        age_months: u32,
        height_cm: f64,
        encoder: &LabelEncoder,
    ) -> Result<Self, ModelError> {
        let sex_code = encoder.transform(sex.as_str())?;

        Ok(Self {
            age_months: f64::from(age_months),
            sex_code: sex_code as f64,
            height_cm,
        })
    }

    pub fn to_array(&self) -> Array1<f64> {
        arr1(&[self.age_months, self.sex_code, self.height_cm])
    }
}
