use std::io::Read;
use std::path::Path;

use anyhow::Context;
use snap_core::{ParsedFields, parse};
use snap_types::View;

use crate::render::render_view;
use crate::state::AppState;

/// A single non-interactive request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneShot {
    Quote,
    Define(String),
    Knowledge,
    Book,
    Classify(String),
}

/// Run one request. Service errors come back as `Err` with the same message
/// the interactive page would show.
pub async fn build_view(state: &AppState, request: OneShot) -> anyhow::Result<View> {
    let view = match request {
        OneShot::Quote => {
            let quote = state.service.random_quote().await?;
            let words = state.rank_text(&quote.text).await;
            View::Quote { quote, words }
        }
        OneShot::Knowledge => {
            let knowledge = state.service.random_knowledge().await?;
            let words = state.rank_text(&knowledge.knowledge).await;
            View::Knowledge { knowledge, words }
        }
        OneShot::Book => {
            let book = state.service.random_book().await?;
            let words = state.rank_text(&book.excerpt).await;
            View::Book { book, words }
        }
        OneShot::Define(word) => {
            let word = word.trim();
            if word.is_empty() {
                anyhow::bail!("Please enter a word to search.");
            }
            View::Definition(state.service.define_word(word).await?)
        }
        OneShot::Classify(text) => View::Words(state.rank_text(&text).await),
    };

    Ok(view)
}

pub fn format_view(view: &View, json: bool, max_words: usize) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(view)?)
    } else {
        Ok(render_view(view, max_words))
    }
}

/// Parse a table response read from `file`, or stdin when `None`
pub fn parse_table_input(file: Option<&Path>) -> anyhow::Result<ParsedFields> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    Ok(parse(&text))
}
