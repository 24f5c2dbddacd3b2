//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod assessment;
mod catalog;
mod logging;
mod output;
mod session;

pub use assessment::FileAssessmentConfig;
pub use catalog::{CatalogLocation, FileCatalogConfig};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use session::FileSessionConfig;

use iqtest_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub assessment: FileAssessmentConfig,
    pub catalog: FileCatalogConfig,
    pub session: FileSessionConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks the scoring strategy name, the default age range and the
    /// catalog source.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.assessment.parse_strategy().1);
        issues.extend(self.assessment.parse_default_age().1);
        issues.extend(self.catalog.location().1);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqtest_domain::{ConfigIssueCode, OutputFormat};
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[assessment]
default_age = 14
strategy = "weighted-accuracy"
seed = 99

[catalog]
path = "data/questions.json"

[session]
state_file = "/var/tmp/iq-session.json"

[output]
format = "json"
color = false

[logging]
event_log = "logs/events.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.assessment.default_age, 14);
        assert_eq!(config.assessment.seed, Some(99));
        assert_eq!(
            config.catalog.path,
            Some(PathBuf::from("data/questions.json"))
        );
        assert_eq!(
            config.session.state_file(),
            PathBuf::from("/var/tmp/iq-session.json")
        );
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(
            config.logging.event_log,
            Some(PathBuf::from("logs/events.jsonl"))
        );
        assert_eq!(config.logging.dir, None);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[assessment]\nseed = 1\n").unwrap();
        assert_eq!(config.assessment.default_age, 18);
        assert_eq!(config.assessment.strategy, "scientific");
        assert_eq!(config.output, FileOutputConfig::default());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let config: FileConfig = toml::from_str(
            r#"
[assessment]
default_age = 300
strategy = "irt"
"#,
        )
        .unwrap();

        let codes: Vec<_> = config.validate().into_iter().map(|i| i.code).collect();
        assert_eq!(
            codes,
            vec![
                ConfigIssueCode::UnknownStrategy,
                ConfigIssueCode::AgeOutOfRange,
                ConfigIssueCode::CatalogSourceMissing,
            ]
        );
    }
}
