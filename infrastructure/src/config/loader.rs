//! Configuration file loader with multi-source merging

use super::file_config::{ConfigValidationError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Project-level config file names, checked in order
const PROJECT_FILES: &[&str] = &["cmdlayer.toml", ".cmdlayer.toml"];

/// Prefix of environment variable overrides (`CMDLAYER_FUNC_CALL__NATIVE=true`)
const ENV_PREFIX: &str = "CMDLAYER_";

/// Errors from loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./cmdlayer.toml` or `./.cmdlayer.toml`
    /// 3. Global: `$XDG_CONFIG_HOME/cmdlayer/config.toml`
    /// 4. Environment: `CMDLAYER_*` (nested keys split on `__`)
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        Self::load_from(Self::figment(config_path))
    }

    /// Build the merged figment without extracting it
    pub fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Extract and validate a configuration.
    ///
    /// Every validation issue is logged; the first one is returned.
    pub fn load_from(figment: Figment) -> Result<FileConfig, ConfigError> {
        let config: FileConfig = figment.extract().map_err(Box::new)?;

        let issues = config.validate();
        for issue in &issues {
            warn!("Config: {}", issue);
        }
        match issues.into_iter().next() {
            Some(issue) => Err(issue.into()),
            None => Ok(config),
        }
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/cmdlayer/config.toml if set,
    /// otherwise falls back to ~/.config/cmdlayer/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("cmdlayer").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn config_sources() -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push("  [     ] Project: ./cmdlayer.toml or ./.cmdlayer.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push(format!("  [     ] Env:     {}*", ENV_PREFIX));
        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdlayer_domain::Mode;
    use std::io::Write;

    fn from_toml(toml_str: &str) -> Result<FileConfig, ConfigError> {
        ConfigLoader::load_from(
            Figment::new()
                .merge(Serialized::defaults(FileConfig::default()))
                .merge(Toml::string(toml_str)),
        )
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.mode, Mode::Chat);
        assert!(!config.cmd);
    }

    #[test]
    fn test_load_merges_over_defaults() {
        let config = from_toml(
            r#"
mode = "expert"
[experts.func_call]
native = true
"#,
        )
        .unwrap();
        assert_eq!(config.mode, Mode::Expert);
        assert!(config.experts.func_call.native);
        assert!(!config.func_call.native);
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let err = from_toml(
            r#"
[[plugins]]
id = "a"
[[plugins]]
id = "a"
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ConfigValidationError::DuplicatePluginId(ref id)) if id == "a"
        ));
    }

    #[test]
    fn test_load_reports_type_errors() {
        let err = from_toml(r#"cmd = "yes please""#).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn test_explicit_file_has_highest_priority() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("explicit.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "mode = \"vision\"\ncmd = true").unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.mode, Mode::Vision);
        assert!(config.cmd);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("cmdlayer"));
    }
}
