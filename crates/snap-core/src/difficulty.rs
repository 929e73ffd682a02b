use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language::{ENGLISH, FrequencyProvider};

/// Above this relative frequency a word is `Easy`
pub const EASY_FREQUENCY: f64 = 0.001;
/// Above this (and up to `EASY_FREQUENCY`) a word is `Medium`
pub const MEDIUM_FREQUENCY: f64 = 0.000_01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    Unknown,
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    /// Bucket a relative frequency. Absent words (0.0) are `Hard`.
    pub fn from_frequency(frequency: f64) -> Self {
        if frequency > EASY_FREQUENCY {
            DifficultyTier::Easy
        } else if frequency > MEDIUM_FREQUENCY {
            DifficultyTier::Medium
        } else {
            DifficultyTier::Hard
        }
    }

    /// Sort key, higher = harder
    pub fn rank(&self) -> u8 {
        match self {
            DifficultyTier::Unknown => 0,
            DifficultyTier::Easy => 1,
            DifficultyTier::Medium => 2,
            DifficultyTier::Hard => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyTier::Unknown => "Unknown",
            DifficultyTier::Easy => "Easy",
            DifficultyTier::Medium => "Medium",
            DifficultyTier::Hard => "Hard",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    pub tier: DifficultyTier,
    pub rank: u8,
}

impl From<DifficultyTier> for Difficulty {
    fn from(tier: DifficultyTier) -> Self {
        Self {
            tier,
            rank: tier.rank(),
        }
    }
}

/// A word row of the clickable word table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWord {
    pub word: String,
    pub tier: DifficultyTier,
    pub rank: u8,
}

/// Classify an English word.
pub fn classify<P: FrequencyProvider + ?Sized>(provider: &P, word: &str) -> Difficulty {
    classify_in(provider, word, ENGLISH)
}

/// Classify `word` against the `language` corpus.
///
/// Lookup failures never escape: they are logged and bucketed as `Unknown`.
pub fn classify_in<P: FrequencyProvider + ?Sized>(
    provider: &P,
    word: &str,
    language: &str,
) -> Difficulty {
    match provider.frequency(word, language) {
        Ok(frequency) => DifficultyTier::from_frequency(frequency).into(),
        Err(e) => {
            tracing::warn!("Frequency lookup failed for {:?}: {}", word, e);
            DifficultyTier::Unknown.into()
        }
    }
}

/// Classify every word and order hardest first, alphabetically within a tier.
pub fn rank_words<P, I>(provider: &P, words: I, language: &str) -> Vec<RankedWord>
where
    P: FrequencyProvider + ?Sized,
    I: IntoIterator<Item = String>,
{
    let mut ranked: Vec<RankedWord> = words
        .into_iter()
        .filter(|word| !word.is_empty())
        .map(|word| {
            let difficulty = classify_in(provider, &word, language);
            RankedWord {
                word,
                tier: difficulty.tier,
                rank: difficulty.rank,
            }
        })
        .collect();

    ranked.sort_by(|a, b| match b.rank.cmp(&a.rank) {
        Ordering::Equal => a.word.cmp(&b.word),
        other => other,
    });

    tracing::debug!("Ranked {} words", ranked.len());
    ranked
}
