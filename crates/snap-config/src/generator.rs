use std::env;

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout, HTTP client default when unset
    pub timeout_seconds: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            api_url: default_api_url(),
            timeout_seconds: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let model = env::var("GEMINI_MODEL").unwrap_or(defaults.model);
        let api_url = env::var("GEMINI_API_URL").unwrap_or(defaults.api_url);
        let timeout_seconds = env::var("GEMINI_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok());

        Self {
            api_key,
            model,
            api_url,
            timeout_seconds,
        }
    }

    /// A credential has been supplied
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
