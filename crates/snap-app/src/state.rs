use std::sync::Arc;

use snap_config::Config;
use snap_core::{DefaultPreprocessor, FrequencyProvider, Preprocessor, RankedWord, rank_words};
use snap_lang_english::{EnglishFrequency, SnapService};
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub service: SnapService,
    pub frequency: EnglishFrequency,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let service = SnapService::from_config(&config.generator)?;
        let frequency = EnglishFrequency::with_additional(&config.frequency.additional_paths)?;

        let language = &config.frequency.language;
        if !frequency.supported_languages().contains(language) {
            // every lookup will fail and rank as Unknown
            tracing::warn!("No frequency data for language {:?}", language);
        }

        Ok(Self::with_parts(config, service, frequency))
    }

    pub fn with_parts(config: Config, service: SnapService, frequency: EnglishFrequency) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            service,
            frequency,
        }
    }

    /// Unique words of `text`, hardest first
    pub async fn rank_text(&self, text: &str) -> Vec<RankedWord> {
        let language = {
            let config = self.config.read().await;
            config.frequency.language.clone()
        };

        let words = DefaultPreprocessor.extract_words(text);
        rank_words(&self.frequency, words, &language)
    }
}
