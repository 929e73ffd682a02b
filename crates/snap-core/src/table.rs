//! Parser for the markdown-style tables the generation service replies with.
//!
//! ```text
//! | Field        | Value                      |
//! |--------------|----------------------------|
//! | Quote        | "Stay hungry, stay foolish" |
//! | Author       | Steve Jobs                 |
//! ```
//!
//! Header and separator rows are not recognised as such: the header yields
//! `Field -> Value` and the separator yields a dash-only entry. Both are
//! tolerated rather than filtered; the field views only read the names they
//! know, so the noise never reaches the page.

use std::collections::BTreeMap;

use serde::Serialize;

/// Field name to value pairs extracted from a table response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParsedFields(BTreeMap<String, String>);

impl ParsedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, overwriting any earlier value under the same name
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Value of `field`, or `default` when the table did not carry it
    pub fn get_or<'a>(&'a self, field: &str, default: &'a str) -> &'a str {
        self.get(field).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for ParsedFields {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse a table response into its fields.
///
/// Every line holding at least two cells after the first pipe contributes
/// `second cell -> third cell`, both trimmed. Anything else is skipped, so
/// malformed input degrades to fewer fields instead of an error.
pub fn parse(text: &str) -> ParsedFields {
    let mut fields = ParsedFields::new();

    for line in text.lines() {
        if !line.contains('|') {
            continue;
        }

        let mut cells = line.split('|');
        let (Some(_), Some(field), Some(value)) = (cells.next(), cells.next(), cells.next())
        else {
            continue;
        };

        fields.insert(field.trim(), value.trim());
    }

    tracing::debug!("Parsed {} fields from table response", fields.len());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_yields_no_fields() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
    }

    #[test]
    fn separator_row_is_tolerated() {
        let fields = parse("| Field | Value |\n|---|---|\n| Quote | \"Hi\" |");

        assert_eq!(fields.get("Quote"), Some("\"Hi\""));
        assert_eq!(fields.get("---"), Some("---"));
        assert_eq!(fields.get("Field"), Some("Value"));
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn lines_with_fewer_than_two_pipes_are_skipped() {
        let fields = parse("no pipes here\n| lonely\nQuote | only one cell\n| Author | Ada |");

        // "Quote | only one cell" splits into two segments and is dropped
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("Author"), Some("Ada"));
    }

    #[test]
    fn two_pipes_are_enough() {
        let fields = parse("| Author | Ada Lovelace");
        assert_eq!(fields.get("Author"), Some("Ada Lovelace"));
    }

    #[test]
    fn last_occurrence_wins() {
        let fields = parse("| Author | First |\n| Author | Second |");
        assert_eq!(fields.get("Author"), Some("Second"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn trailing_columns_are_ignored() {
        let fields = parse("| Synonyms | brave, bold | extra | more |");
        assert_eq!(fields.get("Synonyms"), Some("brave, bold"));
    }

    #[test]
    fn surrounding_prose_and_crlf_are_ignored() {
        let text = "Here is your table:\r\n\r\n| Book Title | Dune |\r\n| Author | Frank Herbert |\r\nEnjoy!";
        let fields = parse(text);

        let expected: ParsedFields = [
            ("Author".to_string(), "Frank Herbert".to_string()),
            ("Book Title".to_string(), "Dune".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(fields, expected);
    }

    #[test]
    fn truncated_table_yields_partial_fields() {
        let fields = parse("| Field | Value |\n|---|---|\n| Quote | \"Be");

        assert_eq!(fields.get("Quote"), Some("\"Be"));
        assert_eq!(fields.get_or("Author", "Unknown"), "Unknown");
    }

    #[test]
    fn serializes_as_plain_object() {
        let fields = parse("| Quote | Hi |");
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"Quote":"Hi"}"#);
    }
}
