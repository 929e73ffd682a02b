use std::env;

use serde::{Deserialize, Serialize};

fn default_max_words() -> usize {
    50
}

fn default_show_prompt() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Rows shown in the word table
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    /// Print a "> " prompt when reading commands from a terminal
    #[serde(default = "default_show_prompt")]
    pub show_prompt: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_words: default_max_words(),
            show_prompt: default_show_prompt(),
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        let max_words = env::var("SNAP_MAX_WORDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_words);

        Self {
            max_words,
            ..Self::default()
        }
    }
}
