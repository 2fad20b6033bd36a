//! HTTP handlers for the stunting service.

pub mod health;
pub mod metrics;
pub mod predict;
pub mod root;

pub use health::health_check;
pub use predict::predict;
pub use root::root;
