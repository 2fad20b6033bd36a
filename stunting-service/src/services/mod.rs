pub mod metrics;
pub mod prediction;

pub use prediction::{Prediction, PredictionInput, PredictionService};
