//! Catalog configuration from TOML (`[catalog]` section)

use iqtest_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Local JSON catalog
    pub path: Option<PathBuf>,
    /// Remote JSON catalog (needs the `remote-catalog` feature)
    pub url: Option<String>,
}

/// Where the question catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    File(PathBuf),
    Remote(String),
}

impl FileCatalogConfig {
    /// Resolve the catalog location. A local path wins over a URL.
    pub fn location(&self) -> (Option<CatalogLocation>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        match (&self.path, &self.url) {
            (Some(path), url) => {
                if url.is_some() {
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::CatalogSourceAmbiguous,
                        format!(
                            "catalog.path and catalog.url are both set, using {}",
                            path.display()
                        ),
                    ));
                }
                (Some(CatalogLocation::File(path.clone())), issues)
            }
            (None, Some(url)) => {
                if !cfg!(feature = "remote-catalog") {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::RemoteCatalogUnsupported,
                        format!(
                            "catalog.url '{}' requires a build with the remote-catalog feature",
                            url
                        ),
                    ));
                    return (None, issues);
                }
                (Some(CatalogLocation::Remote(url.clone())), issues)
            }
            (None, None) => {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::CatalogSourceMissing,
                    "catalog.path is not set; taking a test needs --catalog or [catalog] path",
                ));
                (None, issues)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_only() {
        let config = FileCatalogConfig {
            path: Some(PathBuf::from("questions.json")),
            url: None,
        };
        let (location, issues) = config.location();
        assert_eq!(
            location,
            Some(CatalogLocation::File(PathBuf::from("questions.json")))
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_both_set_prefers_path() {
        let config = FileCatalogConfig {
            path: Some(PathBuf::from("q.json")),
            url: Some("https://example.org/q.json".to_string()),
        };
        let (location, issues) = config.location();
        assert!(matches!(location, Some(CatalogLocation::File(_))));
        assert_eq!(issues[0].code, ConfigIssueCode::CatalogSourceAmbiguous);
    }

    #[test]
    fn test_neither_set_warns() {
        let (location, issues) = FileCatalogConfig::default().location();
        assert_eq!(location, None);
        assert_eq!(issues[0].code, ConfigIssueCode::CatalogSourceMissing);
        assert!(!issues[0].is_error());
    }

    #[cfg(not(feature = "remote-catalog"))]
    #[test]
    fn test_url_without_feature_is_error() {
        let config = FileCatalogConfig {
            path: None,
            url: Some("https://example.org/q.json".to_string()),
        };
        let (location, issues) = config.location();
        assert_eq!(location, None);
        assert!(issues[0].is_error());
        assert_eq!(issues[0].code, ConfigIssueCode::RemoteCatalogUnsupported);
    }

    #[cfg(feature = "remote-catalog")]
    #[test]
    fn test_url_with_feature() {
        let config = FileCatalogConfig {
            path: None,
            url: Some("https://example.org/q.json".to_string()),
        };
        let (location, issues) = config.location();
        assert!(matches!(location, Some(CatalogLocation::Remote(_))));
        assert!(issues.is_empty());
    }
}
