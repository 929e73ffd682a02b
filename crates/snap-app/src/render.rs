use std::fmt::Write;

use snap_core::{RankedWord, WordDefinition};
use snap_types::{AppEvent, View};

use crate::commands::HELP;

/// Text printed for an app -> UI event, `None` for events with no output
pub fn render_event(event: &AppEvent, max_words: usize) -> Option<String> {
    match event {
        AppEvent::ShowView(view) => Some(render_view(view, max_words)),
        AppEvent::ShowError(message) => Some(format!("Error: {message}")),
        AppEvent::ShowStatus(message) => Some(message.clone()),
        AppEvent::BackendReady => None,
        AppEvent::UiEvent(_) => None,
    }
}

pub fn render_view(view: &View, max_words: usize) -> String {
    let mut out = String::new();

    match view {
        View::Home { configured } => {
            out.push_str("Welcome to SentenSnap\n");
            out.push_str("Explore motivational quotes and get detailed word definitions with ease!\n");
            if !configured {
                out.push_str(
                    "\nNo Gemini API key configured. Set GEMINI_API_KEY or pass --api-key.\n",
                );
            }
            out.push_str("\nType 'help' for commands.");
        }
        View::Quote { quote, words } => {
            let _ = writeln!(out, "Random Quote\n");
            let _ = writeln!(out, "{}", quote.text);
            let _ = writeln!(out, "— {}", quote.author);
            let _ = writeln!(out, "Source Type: {}", quote.source_type);
            let _ = writeln!(out, "Context: {}", quote.context);
            out.push('\n');
            out.push_str(&word_table("Words in Quote", words, max_words));
        }
        View::Knowledge { knowledge, words } => {
            let _ = writeln!(out, "Random Knowledge\n");
            let _ = writeln!(out, "{}", knowledge.knowledge);
            let _ = writeln!(out, "Source: {}", knowledge.source);
            let _ = writeln!(out, "Context: {}", knowledge.context);
            out.push('\n');
            out.push_str(&word_table("Words in Knowledge", words, max_words));
        }
        View::Book { book, words } => {
            let _ = writeln!(out, "{}", book.title);
            let _ = writeln!(out, "by {}\n", book.author);
            let _ = writeln!(out, "Intro: {}", book.intro);
            let _ = writeln!(out, "Excerpt: {}", book.excerpt);
            out.push('\n');
            out.push_str(&word_table("Words in Excerpt", words, max_words));
        }
        View::Definition(definition) => {
            let _ = writeln!(out, "{}", definition.word);
            out.push_str(&definition_body(definition));
        }
        View::Snapshot(definition) => {
            let _ = writeln!(out, "Word Snapshot: {}", definition.word);
            out.push_str(&definition_body(definition));
        }
        View::Words(words) => out.push_str(&word_table("Words", words, max_words)),
        View::Help => out.push_str(HELP),
    }

    out.trim_end().to_string()
}

fn definition_body(definition: &WordDefinition) -> String {
    format!(
        "Definition: {}\nPart of Speech: {}\nSynonyms: {}\nExample Sentence: {}\n",
        definition.definition,
        definition.part_of_speech,
        definition.synonyms_display(),
        definition.example_sentence,
    )
}

/// Numbered word table, hardest first, at most `max_words` rows
pub fn word_table(title: &str, words: &[RankedWord], max_words: usize) -> String {
    if words.is_empty() {
        return format!("{title}: none\n");
    }

    let width = words
        .iter()
        .take(max_words)
        .map(|w| w.word.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut out = format!("{title} (type 'snap <n>' for a snapshot)\n");
    let _ = writeln!(out, "{:>3}  {:<width$}  Difficulty", "#", "Word");

    for (i, word) in words.iter().take(max_words).enumerate() {
        let _ = writeln!(out, "{:>3}  {:<width$}  {}", i + 1, word.word, word.tier);
    }

    if words.len() > max_words {
        let _ = writeln!(out, "     ... and {} more", words.len() - max_words);
    }

    out
}
