/// Text metric primitives for prompt analysis.
///
/// Every function here is a pure function over the raw prompt string and
/// tolerates empty or whitespace-only input by returning zero-valued
/// defaults. Nothing in this module allocates shared state.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Word tokens for bigram analysis: alphanumeric runs plus hyphen/apostrophe.
static BIGRAM_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9'-]+").expect("bigram token pattern"));

/// Detected prompt language, based on a crude ASCII-letter ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Language {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "unknown")]
    Unknown,
}

/// Read-only snapshot of text metrics, computed once per request.
///
/// Float fields carry full precision so detectors never compare against a
/// rounded value; fixed-decimal rounding is applied at serialization only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetrics {
    pub language: Language,
    pub word_count: usize,
    pub sentence_count: usize,
    pub token_estimate: usize,
    #[serde(serialize_with = "ser_round2")]
    pub average_sentence_length: f64,
    #[serde(serialize_with = "ser_round3")]
    pub long_word_ratio: f64,
    #[serde(serialize_with = "ser_round2")]
    pub readability_score: f64,
    pub repeated_bigram_count: usize,
}

impl TextMetrics {
    /// Compute all metrics for a prompt in one pass.
    ///
    /// `long_word_len` is the character length at which a word counts as
    /// "long" for the long-word ratio.
    pub fn compute(text: &str, long_word_len: usize) -> Self {
        let words = word_count(text);
        let sentences = sentence_count(text);
        let average = if sentences == 0 {
            0.0
        } else {
            words as f64 / sentences as f64
        };

        Self {
            language: language_guess(text),
            word_count: words,
            sentence_count: sentences,
            token_estimate: token_estimate(text),
            average_sentence_length: average,
            long_word_ratio: long_word_ratio(text, long_word_len),
            readability_score: readability_score(text),
            repeated_bigram_count: repeated_bigram_count(text),
        }
    }
}

/// Count whitespace-delimited non-empty tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count sentences as runs of terminal punctuation (`.`, `!`, `?`).
///
/// Consecutive marks collapse into one terminator. A non-empty string with
/// no terminal punctuation counts as one sentence; an empty or
/// whitespace-only string counts as zero.
pub fn sentence_count(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for ch in text.chars() {
        if matches!(ch, '.' | '!' | '?') {
            if !in_run {
                runs += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }

    if runs == 0 && !text.trim().is_empty() {
        1
    } else {
        runs
    }
}

/// Fraction of words whose character length is at least `threshold`.
pub fn long_word_ratio(text: &str, threshold: usize) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }
    let long = words
        .iter()
        .filter(|w| w.chars().count() >= threshold)
        .count();
    long as f64 / words.len() as f64
}

/// Fixed linear token proxy: `round(words * 0.75)`. Not a real tokenizer.
pub fn token_estimate(text: &str) -> usize {
    (word_count(text) as f64 * 0.75).round() as usize
}

/// Guess the language from the ratio of ASCII letters to non-whitespace
/// characters. A ratio of at least 0.85 reads as English.
pub fn language_guess(text: &str) -> Language {
    let mut letters = 0usize;
    let mut non_ws = 0usize;
    for ch in text.chars() {
        if ch.is_whitespace() {
            continue;
        }
        non_ws += 1;
        if ch.is_ascii_alphabetic() {
            letters += 1;
        }
    }
    if non_ws == 0 {
        return Language::Unknown;
    }
    if letters as f64 / non_ws as f64 >= 0.85 {
        Language::En
    } else {
        Language::Unknown
    }
}

/// Flesch Reading Ease analogue.
///
/// `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`,
/// with both denominators guarded to at least 1. Syllables per word are
/// approximated by counting maximal vowel-like runs.
pub fn readability_score(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let sentences = sentence_count(text).max(1) as f64;
    let word_total = words.len().max(1) as f64;
    let syllables: usize = words.iter().map(|w| syllable_estimate(w)).sum();

    206.835 - 1.015 * (word_total / sentences) - 84.6 * (syllables as f64 / word_total)
}

/// Approximate syllables as maximal runs of `[aeiouy]`, minimum 1.
fn syllable_estimate(word: &str) -> usize {
    let mut runs = 0;
    let mut in_vowel = false;
    for ch in word.to_lowercase().chars() {
        let vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !in_vowel {
            runs += 1;
        }
        in_vowel = vowel;
    }
    runs.max(1)
}

/// Count distinct consecutive word-pairs that occur three or more times.
///
/// The text is lower-cased and tokenized to alphanumeric-plus-hyphen/
/// apostrophe runs before pairing.
pub fn repeated_bigram_count(text: &str) -> usize {
    let lower = text.to_lowercase();
    let tokens: Vec<&str> = BIGRAM_TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .collect();
    if tokens.len() < 2 {
        return 0;
    }

    let mut pairs: HashMap<(&str, &str), usize> = HashMap::new();
    for window in tokens.windows(2) {
        *pairs.entry((window[0], window[1])).or_insert(0) += 1;
    }

    pairs.values().filter(|&&count| count >= 3).count()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub(crate) fn round4(value: f64) -> f64 {
    (value * 10000.0).round() / 10000.0
}

fn ser_round2<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round2(*value))
}

fn ser_round3<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round3(*value))
}
