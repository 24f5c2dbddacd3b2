//! Config key registry.
//!
//! Metadata for the known configuration keys, printed by `adaptive-iq config`.

/// Metadata for a single config key.
#[derive(Debug, Clone)]
pub struct ConfigKeyInfo {
    /// Dotted key path (e.g., `"assessment.strategy"`).
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Valid string values (empty if freeform).
    pub valid_values: &'static [&'static str],
}

/// All known config keys with their metadata.
pub fn known_keys() -> &'static [ConfigKeyInfo] {
    &KNOWN_KEYS
}

/// Look up a config key by its dotted path.
pub fn lookup_key(key: &str) -> Option<&'static ConfigKeyInfo> {
    KNOWN_KEYS.iter().find(|k| k.key == key)
}

static KNOWN_KEYS: [ConfigKeyInfo; 9] = [
    ConfigKeyInfo {
        key: "assessment.default_age",
        description: "Age used when none is given at session start",
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "assessment.strategy",
        description: "Scoring strategy",
        valid_values: &["scientific", "weighted-accuracy"],
    },
    ConfigKeyInfo {
        key: "assessment.seed",
        description: "Seed for question selection (random if unset)",
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "catalog.path",
        description: "Question catalog JSON file",
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "catalog.url",
        description: "Question catalog HTTP endpoint",
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "session.state_file",
        description: "Where an in-progress session is saved",
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "output.format",
        description: "Report output format",
        valid_values: &["full", "summary", "json"],
    },
    ConfigKeyInfo {
        key: "logging.event_log",
        description: "JSONL assessment event log path",
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "logging.dir",
        description: "Directory for rolling diagnostic logs",
        valid_values: &[],
    },
];
