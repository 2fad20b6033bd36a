//! Inference over the offline-trained model artifacts.
//!
//! Training happens outside this service. The training script exports two
//! JSON artifacts into the model directory:
//! - `knn_model.json`: the fitted neighbour set, classes and hyperparameters.
//!   `classes` are unique and sorted; `fit_y` indexes into them
//! - `gender_encoder.json`: the label encoder classes for the sex column
//!
//! Both are loaded once at startup by [`ModelArtifact::load`] and shared
//! read-only across requests.

pub mod artifact;
pub mod encoder;
pub mod features;
pub mod knn;

pub use artifact::ModelArtifact;
pub use encoder::LabelEncoder;
pub use features::{FeatureVector, FEATURE_NAMES};
pub use knn::{KnnClassifier, Weighting};

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Artifact schema version this build understands.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load {path}: {source}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: Box<ModelError>,
    },

    #[error("malformed artifact JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("artifact format version {found} is not supported (expected {expected})")]
    IncompatibleVersion { found: u32, expected: u32 },

    #[error("invalid artifact: {0}")]
    InvalidArtifact(String),

    #[error("category '{0}' is not known to the encoder")]
    UnknownCategory(String),

    #[error("inference failed: {0}")]
    Inference(String),
}

/// Metadata about the loaded classifier, exposed on the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub algorithm: &'static str,
    pub n_neighbors: usize,
    pub weights: Weighting,
    pub classes: Vec<String>,
    pub samples: usize,
}

/// A fitted classifier over [`FeatureVector`]s.
pub trait Classifier: Send + Sync {
    /// Known class labels, in the order probabilities are reported.
    fn classes(&self) -> &[String];

    fn predict(&self, features: &FeatureVector) -> Result<String, ModelError>;

    /// Per-class probabilities aligned with [`Classifier::classes`], or `None`
    /// when the model cannot estimate them.
    fn predict_proba(&self, features: &FeatureVector) -> Result<Option<Vec<f64>>, ModelError> {
        let _ = features;
        Ok(None)
    }

    fn summary(&self) -> ModelSummary;
}
