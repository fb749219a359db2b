//! Word segmentation shared by every case style.
//!
//! The input goes through a fixed sequence of rewrites, each of which only
//! inserts or removes space boundaries:
//!
//! 1. whitespace and configured separators become spaces
//! 2. case transitions and acronym boundaries get a space (optional)
//! 3. everything is lowercased and non letter/number characters are dropped
//! 4. letter/number transitions get a space (optional)
//!
//! The remaining text is split on spaces.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Separators recognised by every built-in style
pub const DEFAULT_SEPARATORS: &str = " -_.";

// Uppercase letters without a lowercase form survive lowercasing, so they
// must not start a word or a second pass would split them.
static LOWER_TO_UPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\p{Ll}|\p{Nd})([\p{Lu}&&\p{Changes_When_Lowercased}])").unwrap()
});
static ACRONYM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([\p{Lu}&&\p{Changes_When_Lowercased}]+)([\p{Lu}&&\p{Changes_When_Lowercased}]\p{Ll})",
    )
    .unwrap()
});
static LETTER_TO_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\p{L})(\p{N})").unwrap());
static NUMBER_TO_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\p{N})(\p{L})").unwrap());
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N} ]+").unwrap());

/// Controls how a string is cut into words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerOptions {
    /// Characters treated as explicit word separators (whitespace always is)
    pub separators: String,
    /// Split `fooBar` and `XMLHttp` style boundaries
    pub split_case_transitions: bool,
    /// Split between letters and numbers (`item123` -> `item 123`)
    pub split_letter_digit: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        TokenizerOptions {
            separators: DEFAULT_SEPARATORS.to_string(),
            split_case_transitions: true,
            split_letter_digit: false,
        }
    }
}

impl TokenizerOptions {
    fn is_separator(&self, c: char) -> bool {
        c.is_whitespace() || self.separators.contains(c)
    }
}

/// Split `input` into lowercase words.
///
/// Returns an empty vector for empty or whitespace-only input.
pub fn tokenize(input: &str, options: &TokenizerOptions) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    let mut text: String = input
        .chars()
        .map(|c| if options.is_separator(c) { ' ' } else { c })
        .collect();

    if options.split_case_transitions {
        text = ACRONYM.replace_all(&text, "${1} ${2}").into_owned();
        text = LOWER_TO_UPPER.replace_all(&text, "${1} ${2}").into_owned();
    }

    // Lowercase before stripping: some lowercase mappings emit combining marks
    let mut text = NON_WORD.replace_all(&text.to_lowercase(), "").into_owned();

    // After stripping, so letters and numbers brought together by it still split
    if options.split_letter_digit {
        text = LETTER_TO_NUMBER.replace_all(&text, "${1} ${2}").into_owned();
        text = NUMBER_TO_LETTER.replace_all(&text, "${1} ${2}").into_owned();
    }

    text.split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
