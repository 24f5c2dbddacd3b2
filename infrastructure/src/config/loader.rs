//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "adaptive-iq";
const PROJECT_FILES: [&str; 2] = ["adaptive-iq.toml", ".adaptive-iq.toml"];
const ENV_PREFIX: &str = "ADAPTIVE_IQ_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ADAPTIVE_IQ_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./adaptive-iq.toml` or `./.adaptive-iq.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/adaptive-iq/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path();
        let project = Self::project_config_path();
        Self::figment(
            global.as_deref(),
            project.as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(Box::new)
    }

    /// File layers only, without the environment
    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(project_path) = project {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/adaptive-iq/config.toml if set,
    /// otherwise falls back to ~/.config/adaptive-iq/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./adaptive-iq.toml or ./.adaptive-iq.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqtest_domain::OutputFormat;

    fn extract(figment: Figment) -> FileConfig {
        figment.extract().unwrap()
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.assessment.default_age, 18);
        assert!(config.catalog.path.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("adaptive-iq"));
    }

    #[test]
    fn test_no_files_gives_defaults() {
        let config = extract(ConfigLoader::figment(None, None, None));
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_missing_global_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("config.toml");
        let config = extract(ConfigLoader::figment(Some(&absent), None, None));
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_layers_override_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("adaptive-iq.toml");
        let explicit = dir.path().join("explicit.toml");

        std::fs::write(
            &global,
            "[assessment]\ndefault_age = 30\nseed = 1\n\n[output]\nformat = \"summary\"\n",
        )
        .unwrap();
        std::fs::write(
            &project,
            "[assessment]\ndefault_age = 12\n\n[catalog]\npath = \"q.json\"\n",
        )
        .unwrap();
        std::fs::write(&explicit, "[output]\nformat = \"json\"\n").unwrap();

        let config = extract(ConfigLoader::figment(
            Some(&global),
            Some(&project),
            Some(&explicit),
        ));
        assert_eq!(config.assessment.default_age, 12);
        assert_eq!(config.assessment.seed, Some(1));
        assert_eq!(config.catalog.path, Some(PathBuf::from("q.json")));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_project_config_discovery() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(ConfigLoader::project_config_in(dir.path()), None);

        let hidden = dir.path().join(".adaptive-iq.toml");
        std::fs::write(&hidden, "").unwrap();
        assert_eq!(ConfigLoader::project_config_in(dir.path()), Some(hidden));

        let visible = dir.path().join("adaptive-iq.toml");
        std::fs::write(&visible, "").unwrap();
        assert_eq!(ConfigLoader::project_config_in(dir.path()), Some(visible));
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("bad.toml");
        std::fs::write(&explicit, "[output]\nformat = \"xml\"\n").unwrap();
        assert!(
            ConfigLoader::figment(None, None, Some(&explicit))
                .extract::<FileConfig>()
                .is_err()
        );
    }
}
