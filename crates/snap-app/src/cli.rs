use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Vocabulary snapshots from generated quotes, trivia and book excerpts
#[derive(Debug, Parser)]
#[command(name = "sentensnap", version, about)]
pub struct Cli {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Load settings from a saved profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Gemini model name
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Print views as JSON instead of text (one-shot commands)
    #[arg(long, global = true)]
    pub json: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive page (default)
    Interactive,
    /// Generate a random quote
    Quote,
    /// Look up a word
    Define { word: String },
    /// Generate a random piece of knowledge
    Knowledge,
    /// Pick a random book
    Book,
    /// Rank the words of a text by difficulty, offline
    Classify {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Parse a table response from a file (or stdin) and print its fields
    Parse { file: Option<PathBuf> },
    /// Manage saved profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// Create the main profile if it does not exist
    Init,
    /// Add a profile cloned from main
    Add { name: String },
}
