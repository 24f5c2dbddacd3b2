//! Application configuration

pub mod assessment_params;

pub use assessment_params::{AssessmentParams, DEFAULT_AGE};
