//! Use cases (application services)

pub mod run_assessment;
pub mod score_session;
