use crate::classifier::{FeatureVector, ModelArtifact, ModelError, ModelSummary};
use crate::models::{describe_label, Sex, StuntingStatus};
use crate::services::metrics;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A validated prediction request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionInput {
    pub sex: Sex,
    pub age_months: u32,
    pub height_cm: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// `None` when the model emitted a label outside the known statuses.
    pub status: Option<StuntingStatus>,
    pub description: &'static str,
    /// Percentage (0–100, two decimals) per class label.
    pub probabilities: Option<BTreeMap<String, f64>>,
}

/// Runs the loaded model. Cheap to clone; the artifact is shared.
#[derive(Clone, Debug)]
pub struct PredictionService {
    artifact: Arc<ModelArtifact>,
}

impl PredictionService {
    pub fn new(artifact: ModelArtifact) -> Self {
        Self {
            artifact: Arc::new(artifact),
        }
    }

    pub fn model_summary(&self) -> ModelSummary {
        self.artifact.classifier.summary()
    }

    #[tracing::instrument(skip(self))]
    pub fn predict(&self, input: &PredictionInput) -> Result<Prediction, ModelError> {
        let features = FeatureVector::encode(
            input.sex,
            input.age_months,
            input.height_cm,
            &self.artifact.encoder,
        )
        .inspect_err(|_| metrics::record_failure("encode"))?;

        let classifier = &self.artifact.classifier;
        let (label, probabilities) = classifier
            .predict(&features)
            .and_then(|label| {
                let probabilities = classifier
                    .predict_proba(&features)?
                    .map(|proba| to_percentages(classifier.classes(), &proba))
                    .transpose()?;
                Ok((label, probabilities))
            })
            .inspect_err(|_| metrics::record_failure("predict"))?;

        let status = StuntingStatus::from_label(&label);
        metrics::record_prediction(&label);
        tracing::debug!(
            label = %label,
            at_risk = status.map(|s| s.is_at_risk()),
            "Prediction complete"
        );

        Ok(Prediction {
            description: describe_label(&label),
            status,
            label,
            probabilities,
        })
    }
}

/// Key probabilities by class label and rescale to rounded percentages.
fn to_percentages(classes: &[String], proba: &[f64]) -> Result<BTreeMap<String, f64>, ModelError> {
    if classes.len() != proba.len() {
        return Err(ModelError::Inference(format!(
            "classifier returned {} probabilities for {} classes",
            proba.len(),
            classes.len()
        )));
    }

    Ok(classes
        .iter()
        .zip(proba)
        .map(|(class, p)| (class.clone(), round2(p * 100.0)))
        .collect())
}

/// Round to two decimals, halves away from zero rather than to even. The two
/// only disagree when a percentage is exactly representable with a 5 in the
/// third decimal.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
