use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

// ExtractionConfig lives with the engine it configures
use adfacts_extract::ExtractionConfig;

const CONFIG_DIR: &str = "adfacts";
const CONFIG_FILE: &str = "config.json";

const CONFIG_TEMPLATE: &str = r#"{
  "log": {
    "level": "warn"
  },
  "output": {
    "format": "debug"
  },
  "extraction": {
    "resolver": "pairwise"
  }
}
"#;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Default `tracing` filter, overridden by `RUST_LOG`.
    #[serde(default = "LogConfig::default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LogConfig {
    fn default_level() -> String {
        "warn".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How the fact list is written to standard output.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed debug representation.
    #[default]
    Debug,
    /// A JSON array of facts.
    Json,
    /// One fact per line.
    Lines,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Json => "json",
            Self::Lines => "lines",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "json" => Ok(Self::Json),
            "lines" => Ok(Self::Lines),
            other => Err(format!(
                "unknown output format '{other}', expected debug, json or lines"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load `~/adfacts/config.json`, falling back to defaults when it does not exist.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Write the config template to `~/adfacts/config.json`.
    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::ensure_config_dir()?.join(CONFIG_FILE);
        Self::create_config_at(&config_path)?;
        Ok(config_path)
    }

    /// Write the config template to `path`, refusing to overwrite an existing file.
    pub fn create_config_at(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        std::fs::write(path, CONFIG_TEMPLATE)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adfacts_extract::ResolverKind;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_template_matches_defaults() {
        let config: Config =
            serde_json::from_str(CONFIG_TEMPLATE).expect("template should deserialize");
        assert_eq!(config, Config::default());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("empty config should deserialize");
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.output.format, OutputFormat::Debug);
        assert_eq!(config.extraction.resolver, ResolverKind::Pairwise);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_partial_config() {
        let config: Config =
            serde_json::from_str(r#"{"output": {"format": "json"}, "extraction": {"resolver": "sweep"}}"#)
                .expect("partial config should deserialize");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.extraction.resolver, ResolverKind::Sweep);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("lines".parse::<OutputFormat>(), Ok(OutputFormat::Lines));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_create_then_load() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join(CONFIG_FILE);

        Config::create_config_at(&path).expect("config should be written");
        let config = Config::load_from(&path).expect("written config should load");
        assert_eq!(config, Config::default());

        assert!(Config::create_config_at(&path).is_err());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").expect("file should be written");

        let err = Config::load_from(&path).expect_err("invalid JSON should fail");
        assert!(err.to_string().starts_with("Invalid config file"));
    }
}
