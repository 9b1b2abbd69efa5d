//! Unicode-aware tokenization shared by the sub-scorers.
//!
//! Every length here is a count of code points, never bytes: a Bengali
//! letter is three bytes in UTF-8.

use regex::Regex;
use std::sync::LazyLock;

/// Bengali full stop (dari).
pub const DARI: char = '।';

pub const SENTENCE_TERMINATORS: [char; 3] = [DARI, '!', '?'];

static PHRASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{0980}-\x{09FF}]+[।!?]").expect("phrase pattern is valid"));

static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[০-৯]{4}").expect("year pattern is valid"));

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Runs of Bengali-block characters closed by a sentence terminator.
pub fn phrases(text: &str) -> Vec<&str> {
    PHRASE_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn is_bengali_digit(ch: char) -> bool {
    ('০'..='৯').contains(&ch)
}

pub fn has_bengali_digit(text: &str) -> bool {
    text.chars().any(is_bengali_digit)
}

/// Four consecutive Bengali digits, e.g. a year such as ২০২৪.
pub fn has_bengali_year(text: &str) -> bool {
    YEAR_REGEX.is_match(text)
}

pub fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

/// First `limit` code points of `text`.
pub fn prefix_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
