use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::frequency::FrequencyConfig;
use self::generator::GeneratorConfig;
use self::ui::UiConfig;

pub mod frequency;
pub mod generator;
pub mod ui;

fn default_channel_capacity() -> usize {
    64
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub frequency: FrequencyConfig,
    pub ui: UiConfig,

    /// Capacity of the app <-> UI event channels
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            frequency: FrequencyConfig::default(),
            ui: UiConfig::default(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Config {
    /// Build from environment variables, falling back to defaults
    pub fn new() -> Self {
        let channel_capacity = env::var("SNAP_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_channel_capacity);

        Config {
            generator: GeneratorConfig::new(),
            frequency: FrequencyConfig::default(),
            ui: UiConfig::new(),
            channel_capacity,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.generator.model, "gemini-pro");
        assert_eq!(
            config.generator.api_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert!(!config.generator.is_configured());
        assert!(config.generator.timeout_seconds.is_none());
        assert_eq!(config.frequency.language, "en");
        assert_eq!(config.ui.max_words, 50);
        assert_eq!(config.channel_capacity, 64);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config =
            Config::from_json_str(r#"{ "generator": { "api_key": "k-123" }, "ui": { "max_words": 10 } }"#)
                .unwrap();

        assert!(config.generator.is_configured());
        assert_eq!(config.generator.api_key, "k-123");
        assert_eq!(config.generator.model, "gemini-pro");
        assert_eq!(config.ui.max_words, 10);
        assert!(config.ui.show_prompt);
        assert!(config.frequency.additional_paths.is_empty());
    }

    #[test]
    fn whitespace_key_is_not_configured() {
        let mut config = Config::default();
        config.generator.api_key = "   ".to_string();
        assert!(!config.generator.is_configured());
    }

    #[test]
    fn json_roundtrip_through_file() {
        let mut config = Config::default();
        config.generator.model = "gemini-1.5-flash".to_string();
        config.frequency.additional_paths = vec!["extra.tsv".to_string()];

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_json_pretty().unwrap().as_bytes())
            .unwrap();

        let loaded = Config::load(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Config::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = Config::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
