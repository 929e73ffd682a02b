pub mod difficulty;
pub mod fields;
pub mod language;
pub mod preprocess;
pub mod state;
pub mod table;

pub use difficulty::{Difficulty, DifficultyTier, RankedWord, classify, classify_in, rank_words};
pub use fields::{Book, Knowledge, Quote, WordDefinition};
pub use language::{FrequencyError, FrequencyProvider, LanguageCode, LoadError};
pub use preprocess::{DefaultPreprocessor, Preprocessor};
pub use state::{Session, UiMode};
pub use table::{ParsedFields, parse};
