//! Descriptive classification of index scores

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification label attached to an index score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassificationLevel {
    #[serde(rename = "Very Superior")]
    VerySuperior,
    #[serde(rename = "Superior")]
    Superior,
    #[serde(rename = "Very High")]
    VeryHigh,
    #[serde(rename = "High Average")]
    HighAverage,
    #[serde(rename = "Average")]
    Average,
    #[serde(rename = "Low Average")]
    LowAverage,
    #[serde(rename = "Borderline")]
    Borderline,
    #[serde(rename = "Extremely Low")]
    ExtremelyLow,
}

impl ClassificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationLevel::VerySuperior => "Very Superior",
            ClassificationLevel::Superior => "Superior",
            ClassificationLevel::VeryHigh => "Very High",
            ClassificationLevel::HighAverage => "High Average",
            ClassificationLevel::Average => "Average",
            ClassificationLevel::LowAverage => "Low Average",
            ClassificationLevel::Borderline => "Borderline",
            ClassificationLevel::ExtremelyLow => "Extremely Low",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ClassificationLevel::VerySuperior => "Genius or near genius",
            ClassificationLevel::Superior => "Gifted",
            ClassificationLevel::VeryHigh => "Superior intelligence",
            ClassificationLevel::HighAverage => "Above average intelligence",
            ClassificationLevel::Average => "Normal intelligence",
            ClassificationLevel::LowAverage => "Below average intelligence",
            ClassificationLevel::Borderline => "Borderline intellectual functioning",
            ClassificationLevel::ExtremelyLow => "Intellectual disability",
        }
    }
}

impl fmt::Display for ClassificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which threshold table to classify with.
///
/// The two tables back different report views and are never merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationPolicy {
    /// Eight levels, 145/130/120/110/90/80/70
    #[default]
    Standard,
    /// Seven levels, 130/120/110/90/80/70, without "Very High"
    Simplified,
}

const STANDARD_TABLE: [(f64, ClassificationLevel); 7] = [
    (145.0, ClassificationLevel::VerySuperior),
    (130.0, ClassificationLevel::Superior),
    (120.0, ClassificationLevel::VeryHigh),
    (110.0, ClassificationLevel::HighAverage),
    (90.0, ClassificationLevel::Average),
    (80.0, ClassificationLevel::LowAverage),
    (70.0, ClassificationLevel::Borderline),
];

const SIMPLIFIED_TABLE: [(f64, ClassificationLevel); 6] = [
    (130.0, ClassificationLevel::VerySuperior),
    (120.0, ClassificationLevel::Superior),
    (110.0, ClassificationLevel::HighAverage),
    (90.0, ClassificationLevel::Average),
    (80.0, ClassificationLevel::LowAverage),
    (70.0, ClassificationLevel::Borderline),
];

impl ClassificationPolicy {
    /// Classify a score; thresholds are inclusive lower bounds
    pub fn classify(&self, score: f64) -> ClassificationLevel {
        let table: &[(f64, ClassificationLevel)] = match self {
            ClassificationPolicy::Standard => &STANDARD_TABLE,
            ClassificationPolicy::Simplified => &SIMPLIFIED_TABLE,
        };
        table
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, level)| *level)
            .unwrap_or(ClassificationLevel::ExtremelyLow)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationPolicy::Standard => "standard",
            ClassificationPolicy::Simplified => "simplified",
        }
    }
}

impl fmt::Display for ClassificationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClassificationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(ClassificationPolicy::Standard),
            "simplified" | "simple" => Ok(ClassificationPolicy::Simplified),
            _ => Err(format!("Invalid classification policy: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_thresholds_are_inclusive() {
        let p = ClassificationPolicy::Standard;
        assert_eq!(p.classify(145.0), ClassificationLevel::VerySuperior);
        assert_eq!(p.classify(144.9), ClassificationLevel::Superior);
        assert_eq!(p.classify(130.0), ClassificationLevel::Superior);
        assert_eq!(p.classify(120.0), ClassificationLevel::VeryHigh);
        assert_eq!(p.classify(110.0), ClassificationLevel::HighAverage);
        assert_eq!(p.classify(100.0), ClassificationLevel::Average);
        assert_eq!(p.classify(90.0), ClassificationLevel::Average);
        assert_eq!(p.classify(89.5), ClassificationLevel::LowAverage);
        assert_eq!(p.classify(70.0), ClassificationLevel::Borderline);
        assert_eq!(p.classify(69.0), ClassificationLevel::ExtremelyLow);
    }

    #[test]
    fn test_simplified_table_differs() {
        let p = ClassificationPolicy::Simplified;
        assert_eq!(p.classify(150.0), ClassificationLevel::VerySuperior);
        assert_eq!(p.classify(130.0), ClassificationLevel::VerySuperior);
        assert_eq!(p.classify(125.0), ClassificationLevel::Superior);
        assert_eq!(p.classify(90.0), ClassificationLevel::Average);
        assert_eq!(p.classify(85.0), ClassificationLevel::LowAverage);
        assert_eq!(p.classify(75.0), ClassificationLevel::Borderline);
        assert_eq!(p.classify(60.0), ClassificationLevel::ExtremelyLow);
        assert_eq!(
            p.classify(75.0),
            ClassificationPolicy::Standard.classify(75.0)
        );
        assert_ne!(
            p.classify(135.0),
            ClassificationPolicy::Standard.classify(135.0)
        );
    }

    #[test]
    fn test_level_serializes_as_label() {
        let json = serde_json::to_string(&ClassificationLevel::HighAverage).unwrap();
        assert_eq!(json, "\"High Average\"");
        assert_eq!(ClassificationLevel::Superior.description(), "Gifted");
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "Simplified".parse::<ClassificationPolicy>().unwrap(),
            ClassificationPolicy::Simplified
        );
        assert!("other".parse::<ClassificationPolicy>().is_err());
    }
}
