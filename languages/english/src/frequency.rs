use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use snap_core::language::{ENGLISH, FrequencyError, FrequencyProvider, LanguageCode, LoadError};
use wordfreq::WordFreq;
use wordfreq_model::ModelKind;

static REFERENCE: OnceLock<Arc<WordFreq>> = OnceLock::new();

/// The wordfreq large English list, deserialized once per process
fn reference() -> Result<Arc<WordFreq>, LoadError> {
    if let Some(model) = REFERENCE.get() {
        return Ok(model.clone());
    }

    let model = wordfreq_model::load_wordfreq(ModelKind::LargeEn)
        .map_err(|e| LoadError::InvalidFormat(format!("wordfreq English model: {e}")))?;
    tracing::info!("Loaded wordfreq large English model");

    Ok(REFERENCE.get_or_init(|| Arc::new(model)).clone())
}

/// English word frequencies from wordfreq, with optional user overrides
pub struct EnglishFrequency {
    reference: Arc<WordFreq>,
    overrides: HashMap<String, f64>,
}

impl EnglishFrequency {
    /// Reference frequencies only
    pub fn with_defaults() -> Result<Self, LoadError> {
        Ok(Self {
            reference: reference()?,
            overrides: HashMap::new(),
        })
    }

    /// Reference frequencies overlaid by every readable file in `additional_paths`.
    /// Later files win over earlier ones.
    pub fn with_additional(additional_paths: &[String]) -> Result<Self, LoadError> {
        let mut corpus = Self::with_defaults()?;

        for path in additional_paths {
            match Self::load_overrides(Path::new(path)) {
                Ok(overrides) => {
                    tracing::info!("Overlaying {} frequencies from: {}", overrides.len(), path);
                    corpus.overrides.extend(overrides);
                }
                Err(e) => {
                    tracing::warn!("Failed to load frequency list from {}: {}", path, e);
                }
            }
        }

        Ok(corpus)
    }

    /// Load override frequencies from a TSV file (word\tfrequency format)
    pub fn load_overrides(path: &Path) -> Result<HashMap<String, f64>, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let frequencies = parse_tsv(&content);
        if frequencies.is_empty() {
            return Err(LoadError::InvalidFormat(format!(
                "{}: no word\\tfrequency rows",
                path.display()
            )));
        }
        Ok(frequencies)
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl FrequencyProvider for EnglishFrequency {
    fn frequency(&self, word: &str, language: &str) -> Result<f64, FrequencyError> {
        if language != ENGLISH {
            return Err(FrequencyError::UnsupportedLanguage(language.to_string()));
        }

        let word = word.trim();
        if word.is_empty() {
            return Err(FrequencyError::InvalidWord(word.to_string()));
        }

        let word = word.to_lowercase();
        if let Some(freq) = self.overrides.get(&word) {
            return Ok(*freq);
        }

        Ok(f64::from(self.reference.word_frequency(&word)))
    }

    fn supported_languages(&self) -> Vec<LanguageCode> {
        vec![ENGLISH.to_string()]
    }
}

fn parse_tsv(content: &str) -> HashMap<String, f64> {
    let mut frequencies = HashMap::new();

    for line in content.lines() {
        if line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() >= 2 {
            if let Ok(freq) = parts[1].trim().parse::<f64>() {
                if freq.is_finite() && freq >= 0.0 {
                    frequencies.insert(parts[0].trim().to_lowercase(), freq);
                }
            }
        }
    }

    frequencies
}
