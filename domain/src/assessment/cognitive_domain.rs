//! Cognitive domain value object

use serde::{Deserialize, Serialize};

/// One of the five measured cognitive areas.
///
/// Declaration order is the order in which a session walks the domains.
/// Serialized with the human-readable name (e.g. `"Working Memory"`) so the
/// catalog and persisted sessions stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CognitiveDomain {
    #[serde(rename = "Verbal Comprehension")]
    VerbalComprehension,
    #[serde(rename = "Perceptual Reasoning")]
    PerceptualReasoning,
    #[serde(rename = "Working Memory")]
    WorkingMemory,
    #[serde(rename = "Processing Speed")]
    ProcessingSpeed,
    #[serde(rename = "Fluid Reasoning")]
    FluidReasoning,
}

impl CognitiveDomain {
    /// All domains in session progression order
    pub const ALL: [CognitiveDomain; 5] = [
        CognitiveDomain::VerbalComprehension,
        CognitiveDomain::PerceptualReasoning,
        CognitiveDomain::WorkingMemory,
        CognitiveDomain::ProcessingSpeed,
        CognitiveDomain::FluidReasoning,
    ];

    /// Domain at a given position in the progression, if any
    pub fn at(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CognitiveDomain::VerbalComprehension => "Verbal Comprehension",
            CognitiveDomain::PerceptualReasoning => "Perceptual Reasoning",
            CognitiveDomain::WorkingMemory => "Working Memory",
            CognitiveDomain::ProcessingSpeed => "Processing Speed",
            CognitiveDomain::FluidReasoning => "Fluid Reasoning",
        }
    }

    /// Two-letter code used in question ids (`vc_e1`, `ps_h3`, ...)
    pub fn short_code(&self) -> &'static str {
        match self {
            CognitiveDomain::VerbalComprehension => "vc",
            CognitiveDomain::PerceptualReasoning => "pr",
            CognitiveDomain::WorkingMemory => "wm",
            CognitiveDomain::ProcessingSpeed => "ps",
            CognitiveDomain::FluidReasoning => "fr",
        }
    }

    /// One-line description shown before a section starts
    pub fn description(&self) -> &'static str {
        match self {
            CognitiveDomain::VerbalComprehension => {
                "This section measures your ability to understand and reason with words."
            }
            CognitiveDomain::PerceptualReasoning => {
                "This section tests your ability to analyze visual patterns and spatial relationships."
            }
            CognitiveDomain::WorkingMemory => {
                "This section evaluates your ability to hold and manipulate information in mind."
            }
            CognitiveDomain::ProcessingSpeed => {
                "This section measures how quickly and accurately you can process information."
            }
            CognitiveDomain::FluidReasoning => {
                "This section tests your ability to solve new problems using logic and reasoning."
            }
        }
    }
}

impl std::fmt::Display for CognitiveDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CognitiveDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();

        match normalized.as_str() {
            "verbalcomprehension" | "vc" => Ok(CognitiveDomain::VerbalComprehension),
            "perceptualreasoning" | "pr" => Ok(CognitiveDomain::PerceptualReasoning),
            "workingmemory" | "wm" => Ok(CognitiveDomain::WorkingMemory),
            "processingspeed" | "ps" => Ok(CognitiveDomain::ProcessingSpeed),
            "fluidreasoning" | "fr" => Ok(CognitiveDomain::FluidReasoning),
            _ => Err(format!("Unknown cognitive domain: {}", s)),
        }
    }
}
