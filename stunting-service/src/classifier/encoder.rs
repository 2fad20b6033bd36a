use super::{ModelError, ARTIFACT_FORMAT_VERSION};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Maps a categorical value to the integer code it had at training time.
///
/// The code of a category is its position in `classes`.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EncoderData {
    format_version: u32,
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Result<Self, ModelError> {
        if classes.is_empty() {
            return Err(ModelError::InvalidArtifact(
                "encoder has no classes".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = classes.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(ModelError::InvalidArtifact(format!(
                "encoder class '{}' is duplicated",
                dup
            )));
        }

        Ok(Self { classes })
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let data: EncoderData = serde_json::from_str(json)?;

        if data.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ModelError::IncompatibleVersion {
                found: data.format_version,
                expected: ARTIFACT_FORMAT_VERSION,
            });
        }

        Self::new(data.classes)
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

    pub fn transform(&self, value: &str) -> Result<usize, ModelError> {
        self.classes
            .iter()
            .position(|c| c == value)
            .ok_or_else(|| ModelError::UnknownCategory(value.to_string()))
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
