use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "en".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FrequencyConfig {
    #[serde(default = "default_language")]
    pub language: String,
    /// Extra `word\tfrequency` files merged over the embedded corpus
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            additional_paths: vec![],
        }
    }
}
