/// ISO 639-1 code ("en", "fr", ...)
pub type LanguageCode = String;

pub const ENGLISH: &str = "en";

/// Word frequency data
pub trait FrequencyProvider: Send + Sync {
    /// Relative frequency of `word` in `language` (0.0 if not in the corpus)
    fn frequency(&self, word: &str, language: &str) -> Result<f64, FrequencyError>;

    /// Languages this provider has a corpus for
    fn supported_languages(&self) -> Vec<LanguageCode>;
}

#[derive(Debug, thiserror::Error)]
pub enum FrequencyError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid word: {0:?}")]
    InvalidWord(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
