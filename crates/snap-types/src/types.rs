use serde::{Deserialize, Serialize};
use snap_core::{Book, Knowledge, Quote, RankedWord, WordDefinition};

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Render a view on the page
    ShowView(View),
    /// A failed operation, shown instead of any fields
    ShowError(String),
    ShowStatus(String),
    BackendReady,
}

/// Something the user did on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Collapse every section
    Home,
    RequestQuote,
    RequestKnowledge,
    RequestBook,
    Define(String),
    /// Click a listed word, by 1-based position or by text
    Snapshot(String),
    ShowWords,
    Help,
    Close,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum View {
    Home { configured: bool },
    Quote { quote: Quote, words: Vec<RankedWord> },
    Knowledge { knowledge: Knowledge, words: Vec<RankedWord> },
    Book { book: Book, words: Vec<RankedWord> },
    Definition(WordDefinition),
    /// Sidebar definition of a clicked word
    Snapshot(WordDefinition),
    Words(Vec<RankedWord>),
    Help,
}
