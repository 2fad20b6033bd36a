use super::{Classifier, KnnClassifier, LabelEncoder, ModelError};
use crate::config::ModelConfig;
use crate::models::Sex;
use std::sync::Arc;

/// The loaded classifier and sex encoder. Read-only after construction.
#[derive(Clone)]
pub struct ModelArtifact {
    pub classifier: Arc<dyn Classifier>,
    pub encoder: LabelEncoder,
}

impl ModelArtifact {
    pub fn new(classifier: Arc<dyn Classifier>, encoder: LabelEncoder) -> Self {
        Self {
            classifier,
            encoder,
        }
    }

    /// Load both artifacts from the configured model directory.
    pub fn load(config: &ModelConfig) -> Result<Self, ModelError> {
        let model_path = config.model_path();
        let encoder_path = config.encoder_path();

        let classifier = KnnClassifier::from_path(&model_path)?;
        let encoder = LabelEncoder::from_path(&encoder_path)?;

        let summary = classifier.summary();
        tracing::info!(
            model = %model_path.display(),
            encoder = %encoder_path.display(),
            n_neighbors = summary.n_neighbors,
            samples = summary.samples,
            classes = ?summary.classes,
            "Loaded model artifacts"
        );

        let artifact = Self::new(Arc::new(classifier), encoder);
        artifact.warn_on_encoder_drift();
        Ok(artifact)
    }

    /// Accepted sex values the encoder was not fit on. Requests carrying
    /// them will fail at encoding time.
    pub fn unencodable_sexes(&self) -> Vec<Sex> {
        Sex::ALL
            .into_iter()
            .filter(|sex| self.encoder.transform(sex.as_str()).is_err())
            .collect()
    }

    fn warn_on_encoder_drift(&self) {
        let missing = self.unencodable_sexes();
        if !missing.is_empty() {
            tracing::warn!(
                missing = ?missing,
                encoder_classes = ?self.encoder.classes(),
                "Encoder does not cover every accepted sex value"
            );
        }
    }
}

impl std::fmt::Debug for ModelArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelArtifact")
            .field("classifier", &self.classifier.summary())
            .field("encoder", &self.encoder)
            .finish()
    }
}
