//! Relative strengths and weaknesses across domains

use super::score_report::ProfileEntry;
use crate::assessment::CognitiveDomain;
use std::collections::BTreeMap;

/// Minimum distance from the mean that counts as a strength or weakness
pub const PROFILE_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileAnalysis {
    pub strengths: Vec<ProfileEntry>,
    pub weaknesses: Vec<ProfileEntry>,
    pub recommendations: Vec<String>,
}

impl ProfileAnalysis {
    /// Compare each domain to the mean of `scores`.
    ///
    /// Only domains with data should be passed in. A distance of exactly
    /// the threshold is neither a strength nor a weakness.
    pub fn analyze(scores: &BTreeMap<CognitiveDomain, i32>) -> Self {
        if scores.is_empty() {
            return Self::default();
        }
        let mean = scores.values().map(|s| *s as f64).sum::<f64>() / scores.len() as f64;

        let mut analysis = Self::default();
        for (domain, score) in scores {
            let deviation = *score as f64 - mean;
            let entry = ProfileEntry {
                domain: *domain,
                score: *score,
                deviation,
            };
            if deviation > PROFILE_THRESHOLD {
                analysis.strengths.push(entry);
            } else if deviation < -PROFILE_THRESHOLD {
                analysis.weaknesses.push(entry);
            }
        }

        analysis.recommendations = analysis
            .strengths
            .iter()
            .map(|s| {
                format!(
                    "Continue developing your {} abilities through advanced challenges.",
                    s.domain
                )
            })
            .chain(analysis.weaknesses.iter().map(|w| {
                format!(
                    "Consider practicing {} exercises to strengthen this area.",
                    w.domain
                )
            }))
            .collect();
        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_profile_has_no_entries() {
        let scores: BTreeMap<_, _> = CognitiveDomain::ALL.iter().map(|d| (*d, 100)).collect();
        let analysis = ProfileAnalysis::analyze(&scores);
        assert!(analysis.strengths.is_empty());
        assert!(analysis.weaknesses.is_empty());
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn test_strength_and_weakness() {
        let scores = BTreeMap::from([
            (CognitiveDomain::VerbalComprehension, 125),
            (CognitiveDomain::PerceptualReasoning, 100),
            (CognitiveDomain::WorkingMemory, 100),
            (CognitiveDomain::ProcessingSpeed, 100),
            (CognitiveDomain::FluidReasoning, 75),
        ]);
        let analysis = ProfileAnalysis::analyze(&scores);
        assert_eq!(analysis.strengths.len(), 1);
        assert_eq!(analysis.strengths[0].domain, CognitiveDomain::VerbalComprehension);
        assert_eq!(analysis.strengths[0].deviation, 25.0);
        assert_eq!(analysis.weaknesses[0].domain, CognitiveDomain::FluidReasoning);
        assert_eq!(
            analysis.recommendations,
            vec![
                "Continue developing your Verbal Comprehension abilities through advanced challenges."
                    .to_string(),
                "Consider practicing Fluid Reasoning exercises to strengthen this area.".to_string(),
            ]
        );
    }

    #[test]
    fn test_exact_threshold_is_neither() {
        let scores = BTreeMap::from([
            (CognitiveDomain::VerbalComprehension, 110),
            (CognitiveDomain::WorkingMemory, 90),
        ]);
        let analysis = ProfileAnalysis::analyze(&scores);
        assert!(analysis.strengths.is_empty());
        assert!(analysis.weaknesses.is_empty());
    }
}
