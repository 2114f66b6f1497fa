// Word-frequency analysis: tokenize, filter, count, rank.
//
// Tokens are maximal \w+ runs of the lowercased text; punctuation and
// whitespace are separators. Counting goes through an IndexMap so that
// entries with equal counts keep the order in which their token first
// appeared — the final sort is stable and compares counts only.

use indexmap::IndexMap;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Common words dropped when `skip_common_words` is set. Process-wide
/// constant, not user-configurable.
pub const COMMON_WORDS: [&str; 8] = ["the", "is", "in", "at", "which", "on", "a", "this"];

/// A single ranked token with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

/// Analyzer settings. Immutable once the analyzer is constructed.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// How many top entries to return (must be at least 1)
    pub top_word_count: usize,
    /// Drop tokens found in COMMON_WORDS
    pub skip_common_words: bool,
    /// Drop tokens composed entirely of digits
    pub skip_numbers: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_word_count: 10,
            skip_common_words: false,
            skip_numbers: false,
        }
    }
}

pub struct FrequencyAnalyzer {
    config: AnalyzerConfig,
    token_pattern: Regex,
}

impl FrequencyAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            // Static pattern, cannot fail to compile
            token_pattern: Regex::new(r"\w+").expect("valid token pattern"),
        }
    }

    /// Compute the top `top_word_count` tokens of `text` by frequency,
    /// descending. Ties keep first-seen order. Empty text yields an empty
    /// vec; fewer distinct tokens than `top_word_count` yields all of them.
    pub fn analyze(&self, text: &str) -> Vec<WordFrequency> {
        let lowered = text.to_lowercase();

        let mut counts: IndexMap<&str, u64> = IndexMap::new();
        for token in self.token_pattern.find_iter(&lowered) {
            let word = token.as_str();
            if self.config.skip_common_words && COMMON_WORDS.contains(&word) {
                continue;
            }
            if self.config.skip_numbers && word.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }

        let mut ranked: Vec<(&str, u64)> = counts.into_iter().collect();
        // Stable sort: equal counts keep insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.config.top_word_count);

        ranked
            .into_iter()
            .map(|(word, count)| WordFrequency {
                word: word.to_string(),
                count,
            })
            .collect()
    }
}
