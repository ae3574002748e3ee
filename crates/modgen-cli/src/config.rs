//! Tool settings.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! layer owns settings; the core crate never sees them.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `MODGEN__DEFAULTS__OUTPUT_DIR=./packages`
//! 3. Settings file (`--settings`, else the platform config directory)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "MODGEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub defaults: Defaults,
    pub output: OutputConfig,
}

/// Values used when a command does not say otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Parent directory of generated modules.
    pub output_dir: PathBuf,
    pub locales: Vec<String>,
    /// Extra presets, `<dir>/<id>/template.json`. Shadow the built-in ones.
    pub preset_dir: Option<PathBuf>,
    pub include_tests: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                output_dir: PathBuf::from("."),
                locales: vec!["en_IN".into(), "hi_IN".into()],
                preset_dir: None,
                include_tests: true,
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load settings. An explicit `settings_file` must exist; the default
    /// location is optional.
    pub fn load(settings_file: Option<&Path>) -> anyhow::Result<Self> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("defaults.locales");
        Self::load_with(settings_file, env)
    }

    fn load_with(settings_file: Option<&Path>, env: Environment) -> anyhow::Result<Self> {
        let file = match settings_file {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::from(Self::settings_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let defaults =
            Config::try_from(&Self::default()).context("serializing default settings")?;

        Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(env)
            .build()
            .context("reading settings")?
            .try_deserialize()
            .context("parsing settings")
    }

    /// Default settings file location.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.modgen.toml` in the current directory.
    pub fn settings_path() -> PathBuf {
        directories::ProjectDirs::from("org", "modgen", "modgen")
            .map(|d| d.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from(".modgen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(::config::Map::new()))
    }

    #[test]
    fn defaults_generate_both_locales_with_tests() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.locales, vec!["en_IN", "hi_IN"]);
        assert!(cfg.defaults.include_tests);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_overrides_defaults_key_by_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "[defaults]\noutput_dir = \"packages\"\ninclude_tests = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load_with(Some(&path), no_env()).unwrap();
        assert_eq!(cfg.defaults.output_dir, PathBuf::from("packages"));
        assert!(!cfg.defaults.include_tests);
        assert_eq!(cfg.defaults.locales, vec!["en_IN", "hi_IN"]);
    }

    #[test]
    fn environment_beats_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[output]\nno_color = false\n").unwrap();

        let mut vars = ::config::Map::new();
        vars.insert("MODGEN__OUTPUT__NO_COLOR".to_string(), "true".to_string());
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .source(Some(vars));
        let cfg = AppConfig::load_with(Some(&path), env).unwrap();
        assert!(cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = AppConfig::load_with(Some(&dir.path().join("absent.toml")), no_env());
        assert!(result.is_err());
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
