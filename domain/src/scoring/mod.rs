//! Scoring: response log to score report
//!
//! [`ScoringStrategy`] is the seam; [`ScientificScoring`] runs the seven-stage
//! normed pipeline and [`WeightedAccuracyScoring`] the lighter accuracy
//! mapping. Both are pure and never fail: degenerate input (empty domains,
//! single responses) resolves to documented defaults.

pub mod classification;
pub mod normal;
pub mod pipeline;
pub mod profile;
pub mod reliability;
pub mod score_report;
pub mod strategy;
pub mod tables;
pub mod weighted;

pub use classification::{ClassificationLevel, ClassificationPolicy};
pub use normal::{normal_cdf, percentile, percentile_rank};
pub use pipeline::ScientificScoring;
pub use profile::ProfileAnalysis;
pub use reliability::{Reliability, ReliabilityLevel};
pub use score_report::{ConfidenceInterval, DomainScore, ProfileEntry, ScoreReport};
pub use strategy::{ScoringStrategy, ScoringStrategyKind};
pub use tables::DomainWeights;
pub use weighted::WeightedAccuracyScoring;
