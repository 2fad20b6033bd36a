//! K-nearest-neighbours classifier restored from a JSON artifact.
//!
//! Neighbour search is delegated to linfa-nn. Voting follows the usual KNN
//! rules: each of the `k` nearest samples votes for its class, either with
//! weight 1 (`uniform`) or with the inverse of its distance (`distance`).
//! Probabilities are the normalised votes and the predicted label is the
//! class with the most votes, ties going to the class listed first. Classes
//! must be unique and sorted, as a fitted estimator's `classes_` are.

use super::{Classifier, FeatureVector, ModelError, ModelSummary, ARTIFACT_FORMAT_VERSION, FEATURE_NAMES};
use linfa_nn::distance::{Distance, L2Dist};
use linfa_nn::{LinearSearch, NearestNeighbour};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// How neighbours' votes are weighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    #[default]
    Uniform,
    Distance,
}

/// On-disk layout of `knn_model.json`.
#[derive(Debug, Deserialize)]
struct KnnModelData {
    format_version: u32,
    algorithm: String,
    n_neighbors: usize,
    #[serde(default)]
    weights: Weighting,
    feature_names: Vec<String>,
    classes: Vec<String>,
    fit_x: Vec<Vec<f64>>,
    /// Index into `classes` for each row of `fit_x`.
    fit_y: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct KnnClassifier {
    k: usize,
    weights: Weighting,
    classes: Vec<String>,
    fit_x: Array2<f64>,
    fit_y: Vec<usize>,
}

impl KnnClassifier {
    pub fn new(
        k: usize,
        weights: Weighting,
        classes: Vec<String>,
        fit_x: Array2<f64>,
        fit_y: Vec<usize>,
    ) -> Result<Self, ModelError> {
        let samples = fit_x.nrows();

        if classes.is_empty() {
            return Err(ModelError::InvalidArtifact("model has no classes".to_string()));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = classes.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(ModelError::InvalidArtifact(format!(
                "model class '{}' is duplicated",
                dup
            )));
        }
        // Tie-breaking picks the lowest index, which is only stable over the
        // sorted class list a fitted estimator exports.
        if let Some(pair) = classes.windows(2).find(|pair| pair[0] > pair[1]) {
            return Err(ModelError::InvalidArtifact(format!(
                "model classes must be sorted ('{}' listed before '{}')",
                pair[0], pair[1]
            )));
        }
        if samples == 0 {
            return Err(ModelError::InvalidArtifact(
                "model has no fitted samples".to_string(),
            ));
        }
        if fit_x.ncols() != FEATURE_NAMES.len() {
            return Err(ModelError::InvalidArtifact(format!(
                "fitted samples have {} features, expected {}",
                fit_x.ncols(),
                FEATURE_NAMES.len()
            )));
        }
        if fit_x.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::InvalidArtifact(
                "fitted samples contain non-finite values".to_string(),
            ));
        }
        if fit_y.len() != samples {
            return Err(ModelError::InvalidArtifact(format!(
                "{} labels for {} fitted samples",
                fit_y.len(),
                samples
            )));
        }
        if let Some(bad) = fit_y.iter().find(|&&y| y >= classes.len()) {
            return Err(ModelError::InvalidArtifact(format!(
                "label index {} out of range for {} classes",
                bad,
                classes.len()
            )));
        }
        if k == 0 || k > samples {
            return Err(ModelError::InvalidArtifact(format!(
                "n_neighbors must be between 1 and {} (got {})",
                samples, k
            )));
        }

        Ok(Self {
            k,
            weights,
            classes,
            fit_x,
            fit_y,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let data: KnnModelData = serde_json::from_str(json)?;

        if data.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ModelError::IncompatibleVersion {
                found: data.format_version,
                expected: ARTIFACT_FORMAT_VERSION,
            });
        }
        if data.algorithm != "knn" {
            return Err(ModelError::InvalidArtifact(format!(
                "expected a knn model, found '{}'",
                data.algorithm
            )));
        }
        if data.feature_names != FEATURE_NAMES {
            return Err(ModelError::InvalidArtifact(format!(
                "model was fit on features {:?}, expected {:?}",
                data.feature_names, FEATURE_NAMES
            )));
        }

        let n = data.fit_x.len();
        if let Some(row) = data.fit_x.iter().find(|r| r.len() != FEATURE_NAMES.len()) {
            return Err(ModelError::InvalidArtifact(format!(
                "fitted sample has {} features, expected {}",
                row.len(),
                FEATURE_NAMES.len()
            )));
        }
        let flat: Vec<f64> = data.fit_x.into_iter().flatten().collect();
        let fit_x = Array2::from_shape_vec((n, FEATURE_NAMES.len()), flat)
            .map_err(|e| ModelError::InvalidArtifact(format!("failed to restore samples: {}", e)))?;

        Self::new(data.n_neighbors, data.weights, data.classes, fit_x, data.fit_y)
    }

    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json).map_err(|e| ModelError::Artifact {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    /// Normalised class votes of the `k` nearest fitted samples.
    fn votes(&self, features: &FeatureVector) -> Result<Vec<f64>, ModelError> {
        let query = features.to_array();

        let index = LinearSearch::new()
            .from_batch(&self.fit_x, L2Dist)
            .map_err(|e| ModelError::Inference(e.to_string()))?;
        let neighbours = index
            .k_nearest(query.view(), self.k)
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let mut votes = vec![0.0; self.classes.len()];
        match self.weights {
            Weighting::Uniform => {
                for (_, idx) in &neighbours {
                    votes[self.fit_y[*idx]] += 1.0;
                }
            }
            Weighting::Distance => {
                let distances: Vec<(f64, usize)> = neighbours
                    .iter()
                    .map(|(point, idx)| (L2Dist.distance(point.view(), query.view()), *idx))
                    .collect();

                // Exact matches take all the weight.
                let exact = distances.iter().any(|(d, _)| *d == 0.0);
                for (d, idx) in distances {
                    let weight = match (exact, d == 0.0) {
                        (true, true) => 1.0,
                        (true, false) => 0.0,
                        (false, _) => 1.0 / d,
                    };
                    votes[self.fit_y[idx]] += weight;
                }
            }
        }

        let total: f64 = votes.iter().sum();
        Ok(votes.into_iter().map(|v| v / total).collect())
    }
}

impl Classifier for KnnClassifier {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict(&self, features: &FeatureVector) -> Result<String, ModelError> {
        let votes = self.votes(features)?;

        let mut best = 0;
        for (i, v) in votes.iter().enumerate() {
            if *v > votes[best] {
                best = i;
            }
        }

        Ok(self.classes[best].clone())
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<Option<Vec<f64>>, ModelError> {
        self.votes(features).map(Some)
    }

    fn summary(&self) -> ModelSummary {
        ModelSummary {
            algorithm: "knn",
            n_neighbors: self.k,
            weights: self.weights,
            classes: self.classes.clone(),
            samples: self.fit_x.nrows(),
        }
    }
}
