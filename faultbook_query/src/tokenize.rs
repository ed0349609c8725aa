//! Query tokenization.
//!
//! Turns free-text user input into candidate search keywords: punctuation is
//! stripped, the text is lowercased and split on whitespace, and common
//! filler/function words are dropped.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Everything that is neither a word character nor whitespace.
#[allow(clippy::unwrap_used)]
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Filler and function words that never make useful search keywords.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "um", "like", "you", "know", "so", "well", "actually", "basically", "a", "just", "really",
        "the", "an", "is", "are", "was", "were", "what", "who", "how", "where", "when", "why",
        "to", "would", "i", "me", "his", "her", "ok", "bye", "it", "on", "and", "but", "with",
        "off", "not", "does", "get", "have", "had", "has", "should", "this", "that", "these",
        "those", "my", "your", "our", "its", "they", "them", "he", "she", "him", "which", "whom",
        "if", "as", "because", "while", "until", "whereas", "since", "for", "nor", "or", "yet",
        "both", "either", "neither", "always", "often", "sometimes", "rarely", "never",
    ]
    .into_iter()
    .collect()
});

/// Split free text into candidate search keywords.
///
/// Order-preserving and deterministic; empty input yields an empty vec.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned = NON_WORD.replace_all(text, "");
    cleaned
        .to_lowercase()
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .map(ToString::to_string)
        .collect()
}
