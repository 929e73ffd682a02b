//! Typed views over [`ParsedFields`].
//!
//! A reply may be truncated or mislabelled, so every field is optional on
//! the wire and each view substitutes a fixed default when it is missing.

use serde::{Deserialize, Serialize};

use crate::table::ParsedFields;

pub mod names {
    pub const WORD: &str = "Word";
    pub const DEFINITION: &str = "Definition";
    pub const PART_OF_SPEECH: &str = "Part of Speech";
    pub const SYNONYMS: &str = "Synonyms";
    pub const EXAMPLE_SENTENCE: &str = "Example Sentence";

    pub const QUOTE: &str = "Quote";
    pub const AUTHOR: &str = "Author";
    pub const SOURCE_TYPE: &str = "Source Type";
    pub const CONTEXT: &str = "Context";

    pub const KNOWLEDGE: &str = "Knowledge";
    pub const SOURCE: &str = "Source";

    pub const BOOK_TITLE: &str = "Book Title";
    pub const INTRO: &str = "Intro";
    pub const EXCERPT: &str = "Excerpt";
}

pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub source_type: String,
    pub context: String,
}

impl Quote {
    pub fn from_fields(fields: &ParsedFields) -> Self {
        Self {
            text: fields.get_or(names::QUOTE, "No quote available.").to_string(),
            author: fields.get_or(names::AUTHOR, UNKNOWN).to_string(),
            source_type: fields
                .get_or(names::SOURCE_TYPE, "Unknown Source Type")
                .to_string(),
            context: fields.get_or(names::CONTEXT, "").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDefinition {
    pub word: String,
    pub definition: String,
    pub part_of_speech: String,
    /// Empty when the reply had no synonyms or said "N/A"
    pub synonyms: Vec<String>,
    pub example_sentence: String,
}

impl WordDefinition {
    pub fn from_fields(fields: &ParsedFields) -> Self {
        let synonyms = match fields.get(names::SYNONYMS) {
            Some(list) if list != NOT_AVAILABLE => list
                .split(", ")
                .map(str::to_string)
                .filter(|s| !s.is_empty())
                .collect(),
            _ => Vec::new(),
        };

        Self {
            word: fields.get_or(names::WORD, UNKNOWN).to_string(),
            definition: fields
                .get_or(names::DEFINITION, "No definition available.")
                .to_string(),
            part_of_speech: fields
                .get_or(names::PART_OF_SPEECH, NOT_AVAILABLE)
                .to_string(),
            synonyms,
            example_sentence: fields
                .get_or(names::EXAMPLE_SENTENCE, NOT_AVAILABLE)
                .to_string(),
        }
    }

    /// Synonyms joined for display, "N/A" when there are none
    pub fn synonyms_display(&self) -> String {
        if self.synonyms.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            self.synonyms.join(", ")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Knowledge {
    pub knowledge: String,
    pub source: String,
    pub context: String,
}

impl Knowledge {
    pub fn from_fields(fields: &ParsedFields) -> Self {
        Self {
            knowledge: fields
                .get_or(names::KNOWLEDGE, "No knowledge available.")
                .to_string(),
            source: fields.get_or(names::SOURCE, UNKNOWN).to_string(),
            context: fields.get_or(names::CONTEXT, "").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub intro: String,
    pub excerpt: String,
}

impl Book {
    pub fn from_fields(fields: &ParsedFields) -> Self {
        Self {
            title: fields.get_or(names::BOOK_TITLE, "Unknown Title").to_string(),
            author: fields.get_or(names::AUTHOR, UNKNOWN).to_string(),
            intro: fields.get_or(names::INTRO, NOT_AVAILABLE).to_string(),
            excerpt: fields.get_or(names::EXCERPT, NOT_AVAILABLE).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn quote_from_full_table() {
        let fields = parse(
            "| Field | Value |\n\
             |---|---|\n\
             | Quote | \"Dwell on the beauty of life.\" |\n\
             | Author | Marcus Aurelius |\n\
             | Source Type | Book |\n\
             | Context | Meditations, c. 170 AD |",
        );

        assert_eq!(
            Quote::from_fields(&fields),
            Quote {
                text: "\"Dwell on the beauty of life.\"".to_string(),
                author: "Marcus Aurelius".to_string(),
                source_type: "Book".to_string(),
                context: "Meditations, c. 170 AD".to_string(),
            }
        );
    }

    #[test]
    fn empty_fields_fall_back_to_defaults() {
        let fields = ParsedFields::new();

        let quote = Quote::from_fields(&fields);
        assert_eq!(quote.text, "No quote available.");
        assert_eq!(quote.author, "Unknown");
        assert_eq!(quote.source_type, "Unknown Source Type");
        assert_eq!(quote.context, "");

        let def = WordDefinition::from_fields(&fields);
        assert_eq!(def.word, "Unknown");
        assert_eq!(def.definition, "No definition available.");
        assert_eq!(def.part_of_speech, "N/A");
        assert!(def.synonyms.is_empty());
        assert_eq!(def.example_sentence, "N/A");

        let knowledge = Knowledge::from_fields(&fields);
        assert_eq!(knowledge.knowledge, "No knowledge available.");
        assert_eq!(knowledge.source, "Unknown");

        let book = Book::from_fields(&fields);
        assert_eq!(book.title, "Unknown Title");
        assert_eq!(book.excerpt, "N/A");
    }

    #[test]
    fn synonyms_split_on_comma_space() {
        let fields = parse("| Word | brave |\n| Synonyms | bold, daring, fearless |");
        let def = WordDefinition::from_fields(&fields);

        assert_eq!(def.word, "brave");
        assert_eq!(def.synonyms, vec!["bold", "daring", "fearless"]);
        assert_eq!(def.synonyms_display(), "bold, daring, fearless");
    }

    #[test]
    fn synonyms_not_available() {
        let fields = parse("| Synonyms | N/A |");
        let def = WordDefinition::from_fields(&fields);

        assert!(def.synonyms.is_empty());
        assert_eq!(def.synonyms_display(), "N/A");
    }

    #[test]
    fn book_fields() {
        let fields = parse(
            "| Book Title | Dune |\n| Author | Frank Herbert |\n| Intro | Desert planet. |\n| Excerpt | Fear is the mind-killer. |",
        );
        let book = Book::from_fields(&fields);

        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.intro, "Desert planet.");
        assert_eq!(book.excerpt, "Fear is the mind-killer.");
    }
}
