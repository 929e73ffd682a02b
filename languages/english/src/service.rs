use std::fmt;
use std::sync::Arc;

use snap_config::generator::GeneratorConfig;
use snap_core::fields::names;
use snap_core::{Book, Knowledge, ParsedFields, Quote, WordDefinition, parse};
use snap_generator::{GenerateError, TextGenerator};
use tracing::Instrument;
use uuid::Uuid;

use crate::generator::GeminiGenerator;
use crate::prompts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    DefineWord,
    RandomQuote,
    RandomKnowledge,
    RandomBook,
}

impl Operation {
    pub fn description(&self) -> &'static str {
        match self {
            Operation::DefineWord => "word definition retrieval",
            Operation::RandomQuote => "random quote generation",
            Operation::RandomKnowledge => "random knowledge generation",
            Operation::RandomBook => "random book generation",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SnapError {
    #[error("Gemini API key not configured")]
    NotConfigured,

    #[error("Error during {operation}: {source}")]
    Generation {
        operation: Operation,
        #[source]
        source: GenerateError,
    },
}

/// Generated content, parsed into typed views.
///
/// Every operation makes at most one generation call and reports failure
/// as a [`SnapError`] value; nothing escapes as a panic.
#[derive(Clone)]
pub struct SnapService {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl SnapService {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    pub fn with_generator(generator: impl TextGenerator + 'static) -> Self {
        Self::new(Some(Arc::new(generator)))
    }

    /// Service with no credential. Every operation returns `NotConfigured`.
    pub fn unconfigured() -> Self {
        Self::new(None)
    }

    /// Gemini-backed service, unconfigured when no API key is set
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenerateError> {
        if !config.is_configured() {
            tracing::warn!("No Gemini API key configured, generation disabled");
            return Ok(Self::unconfigured());
        }
        Ok(Self::with_generator(GeminiGenerator::from_config(config)?))
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn define_word(&self, word: &str) -> Result<WordDefinition, SnapError> {
        let mut fields = self
            .fetch_fields(Operation::DefineWord, &prompts::define_word(word))
            .await?;
        fields.insert(names::WORD, word);
        Ok(WordDefinition::from_fields(&fields))
    }

    pub async fn random_quote(&self) -> Result<Quote, SnapError> {
        let fields = self
            .fetch_fields(Operation::RandomQuote, prompts::RANDOM_QUOTE)
            .await?;
        Ok(Quote::from_fields(&fields))
    }

    pub async fn random_knowledge(&self) -> Result<Knowledge, SnapError> {
        let fields = self
            .fetch_fields(Operation::RandomKnowledge, prompts::RANDOM_KNOWLEDGE)
            .await?;
        Ok(Knowledge::from_fields(&fields))
    }

    pub async fn random_book(&self) -> Result<Book, SnapError> {
        let fields = self
            .fetch_fields(Operation::RandomBook, prompts::RANDOM_BOOK)
            .await?;
        Ok(Book::from_fields(&fields))
    }

    /// Send `prompt` and parse the table reply
    pub async fn fetch_fields(
        &self,
        operation: Operation,
        prompt: &str,
    ) -> Result<ParsedFields, SnapError> {
        let Some(generator) = &self.generator else {
            return Err(SnapError::NotConfigured);
        };

        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("generate", %request_id, %operation);

        async move {
            tracing::info!("Requesting {} from {}", operation, generator.metadata().name);

            let text = match generator.generate(prompt).await {
                Ok(text) => text,
                Err(source) => {
                    tracing::error!("Generation failed: {}", source);
                    return Err(SnapError::Generation { operation, source });
                }
            };
            tracing::debug!("Raw response: {} chars", text.len());

            let fields = parse(&text);
            if fields.is_empty() {
                tracing::warn!("Response held no table rows");
            }
            Ok(fields)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use snap_generator::ProviderMetadata;

    use super::*;

    /// Replays a fixed outcome and records prompts
    struct ScriptedGenerator {
        reply: Result<String, fn() -> GenerateError>,
        calls: Arc<AtomicUsize>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedGenerator {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: Arc::new(AtomicUsize::new(0)),
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing(error: fn() -> GenerateError) -> Self {
            Self {
                reply: Err(error),
                ..Self::replying("")
            }
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: "scripted".to_string(),
                model: "test".to_string(),
            }
        }
    }

    #[tokio::test]
    async fn unconfigured_service_reports_missing_key() {
        let service = SnapService::unconfigured();
        assert!(!service.is_configured());

        let err = service.random_quote().await.unwrap_err();
        assert!(matches!(err, SnapError::NotConfigured));
        assert_eq!(err.to_string(), "Gemini API key not configured");

        assert!(matches!(
            service.define_word("brave").await,
            Err(SnapError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn config_without_key_is_unconfigured() {
        let service = SnapService::from_config(&GeneratorConfig::default()).unwrap();
        assert!(!service.is_configured());
    }

    #[tokio::test]
    async fn quote_is_parsed_from_table() {
        let generator = ScriptedGenerator::replying(
            "| Field | Value |\n|---|---|\n| Quote | \"Onward.\" |\n| Author | Jane Doe |",
        );
        let calls = generator.calls.clone();
        let service = SnapService::with_generator(generator);

        let quote = service.random_quote().await.unwrap();

        assert_eq!(quote.text, "\"Onward.\"");
        assert_eq!(quote.author, "Jane Doe");
        assert_eq!(quote.source_type, "Unknown Source Type");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn define_word_records_searched_word() {
        let generator = ScriptedGenerator::replying(
            "| Definition | Showing courage. |\n| Part of Speech | adjective |\n| Synonyms | bold, daring |",
        );
        let prompts = generator.prompts.clone();
        let service = SnapService::with_generator(generator);

        let def = service.define_word("brave").await.unwrap();

        assert_eq!(
            def,
            WordDefinition {
                word: "brave".to_string(),
                definition: "Showing courage.".to_string(),
                part_of_speech: "adjective".to_string(),
                synonyms: vec!["bold".to_string(), "daring".to_string()],
                example_sentence: "N/A".to_string(),
            }
        );
        assert!(prompts.lock().unwrap()[0].contains("\"brave\""));
    }

    #[tokio::test]
    async fn generation_failure_is_wrapped_with_operation() {
        let service =
            SnapService::with_generator(ScriptedGenerator::failing(|| GenerateError::RateLimitExceeded));

        let err = service.random_knowledge().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error during random knowledge generation: Rate limit exceeded"
        );
        assert!(matches!(
            err,
            SnapError::Generation {
                operation: Operation::RandomKnowledge,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn empty_generation_is_an_error() {
        let service =
            SnapService::with_generator(ScriptedGenerator::failing(|| GenerateError::EmptyResponse));

        let err = service.define_word("brave").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error during word definition retrieval: No response generated"
        );
    }

    #[tokio::test]
    async fn prose_reply_degrades_to_defaults() {
        let service = SnapService::with_generator(ScriptedGenerator::replying(
            "Sorry, I cannot produce a table today.",
        ));

        let book = service.random_book().await.unwrap();
        assert_eq!(book.title, "Unknown Title");
        assert_eq!(book.excerpt, "N/A");
    }
}
