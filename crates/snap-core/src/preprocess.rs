use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Normalize generated text before it is split into words
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        text.replace(['\n', '\r'], " ").trim().to_string()
    }

    /// Strip ASCII punctuation and lower-case a single token
    fn clean_word(&self, token: &str) -> String {
        token
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect::<String>()
            .to_lowercase()
    }

    /// Unique cleaned words of `text`, in order of first appearance
    fn extract_words(&self, text: &str) -> Vec<String> {
        let processed = self.process(text);
        let mut seen = HashSet::new();
        let mut words = Vec::new();

        for token in processed.split_whitespace() {
            let word = self.clean_word(token);
            if !word.is_empty() && seen.insert(word.clone()) {
                words.push(word);
            }
        }

        words
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_punctuation_and_lowercases() {
        let p = DefaultPreprocessor;
        assert_eq!(p.clean_word("\"Courage,"), "courage");
        assert_eq!(p.clean_word("isn't"), "isnt");
        assert_eq!(p.clean_word("--"), "");
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let words = DefaultPreprocessor.extract_words("\"The secret of getting ahead is getting started. The end.\"");
        assert_eq!(
            words,
            vec!["the", "secret", "of", "getting", "ahead", "is", "started", "end"]
        );
    }

    #[test]
    fn punctuation_only_tokens_vanish() {
        let words = DefaultPreprocessor.extract_words("Hope — and \n ... courage!");
        // the em dash is not ASCII punctuation and survives as its own word
        assert_eq!(words, vec!["hope", "—", "and", "courage"]);
    }

    #[test]
    fn nfkc_folds_compatibility_forms() {
        let words = DefaultPreprocessor.extract_words("ﬁre Ｂold");
        assert_eq!(words, vec!["fire", "bold"]);
    }

    #[test]
    fn empty_text() {
        assert!(DefaultPreprocessor.extract_words("   ").is_empty());
    }
}
