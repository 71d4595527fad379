use serde::Serialize;
use std::fmt::Display;

use super::CliError;
use crate::config::{OutputConfig, OutputFormat};
use crate::hex_util;

/// How command results are rendered on stdout.
#[derive(Debug, Clone, Default)]
pub struct Output {
    pub format: OutputFormat,
    pub hex_uppercase: bool,
}

impl Output {
    /// Config settings, with `--json` taking precedence.
    pub fn from_config(config: &OutputConfig, force_json: bool) -> Self {
        Self {
            format: if force_json { OutputFormat::Json } else { config.format },
            hex_uppercase: config.hex_uppercase,
        }
    }

    pub fn text() -> Self {
        Self::default()
    }

    pub fn json() -> Self {
        Self {
            format: OutputFormat::Json,
            hex_uppercase: false,
        }
    }

    pub fn hex(&self, bytes: &[u8]) -> String {
        let hex = hex_util::to_hex(bytes);
        if self.hex_uppercase {
            hex.to_uppercase()
        } else {
            hex
        }
    }

    pub fn render<T: Serialize + Display>(&self, report: &T) -> Result<String, CliError> {
        match self.format {
            OutputFormat::Text => Ok(report.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_overrides_config() {
        let config = OutputConfig::default();
        assert_eq!(Output::from_config(&config, true).format, OutputFormat::Json);
        assert_eq!(Output::from_config(&config, false).format, OutputFormat::Text);
    }

    #[test]
    fn test_hex_case() {
        let config = OutputConfig {
            format: OutputFormat::Text,
            hex_uppercase: true,
        };
        assert_eq!(Output::from_config(&config, false).hex(&[0xab, 0x01]), "AB01");
        assert_eq!(Output::text().hex(&[0xab, 0x01]), "ab01");
    }
}
