use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct PrailudeConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub hex_uppercase: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error parsing config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl PrailudeConfig {
    /// Load from a TOML file. A missing file is not an error and yields the
    /// defaults; nothing is ever written back.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PrailudeConfig::from_toml("").unwrap();
        assert_eq!(config, PrailudeConfig::default());
        assert_eq!(config.log.level, "info");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.hex_uppercase);
    }

    #[test]
    fn test_parse_sections() {
        let config = PrailudeConfig::from_toml(
            r#"
            [log]
            level = "debug"

            [output]
            format = "json"
            hex_uppercase = true
            "#,
        )
        .unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.hex_uppercase);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            PrailudeConfig::from_toml("[output]\nformat = \"xml\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = PrailudeConfig::load("definitely/not/here/prailude.toml").unwrap();
        assert_eq!(config, PrailudeConfig::default());
    }
}
