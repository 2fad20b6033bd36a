//! Domain types for stunting prediction.

pub mod sex;
pub mod status;

pub use sex::{ParseSexError, Sex};
pub use status::{describe_label, StuntingStatus, UNKNOWN_STATUS_DESCRIPTION};
