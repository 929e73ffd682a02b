use serde::{Deserialize, Serialize};

use crate::difficulty::RankedWord;
use crate::fields::{Book, Knowledge, Quote, WordDefinition};

/// Which page section is expanded. Only one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMode {
    #[default]
    Home,
    Quote,
    Definition,
    Knowledge,
    Book,
}

impl UiMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiMode::Home => "home",
            UiMode::Quote => "quote",
            UiMode::Definition => "definition",
            UiMode::Knowledge => "knowledge",
            UiMode::Book => "book",
        }
    }
}

/// Per-session page state
#[derive(Debug, Default)]
pub struct Session {
    mode: UiMode,
    pub quote: Option<Quote>,
    pub knowledge: Option<Knowledge>,
    pub book: Option<Book>,
    pub definition: Option<WordDefinition>,
    /// Word table of the text currently on the page
    pub words: Vec<RankedWord>,
    /// Definition of the last clicked word, shown in the sidebar
    pub snapshot: Option<WordDefinition>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Switch the expanded section. Returns the previous mode.
    pub fn set_mode(&mut self, mode: UiMode) -> UiMode {
        let previous = std::mem::replace(&mut self.mode, mode);
        if previous != mode {
            tracing::debug!("UI mode {} -> {}", previous.as_str(), mode.as_str());
        }
        previous
    }

    pub fn is_expanded(&self, mode: UiMode) -> bool {
        self.mode == mode
    }

    /// Replace the word table, dropping any snapshot of the old text
    pub fn set_words(&mut self, words: Vec<RankedWord>) {
        self.words = words;
        self.snapshot = None;
    }

    /// Look up a listed word by its text, else by 1-based position
    pub fn find_word(&self, selector: &str) -> Option<&RankedWord> {
        let selector = selector.trim();
        let needle = selector.to_lowercase();
        if let Some(word) = self.words.iter().find(|w| w.word == needle) {
            return Some(word);
        }

        let index = selector.parse::<usize>().ok()?;
        index.checked_sub(1).and_then(|i| self.words.get(i))
    }
}
