use crate::text::{char_len, contains_any, has_bengali_year, prefix_chars};
use crate::types::metrics::{clamp_score, Score};

const TITLE_LEN_RANGE: std::ops::RangeInclusive<usize> = 30..=60;
const LOCAL_TERMS: [&str; 2] = ["বাংলাদেশ", "ঢাকা"];
const NEWS_TERMS: [&str; 2] = ["সংবাদ", "খবর"];
const MIN_CONTENT_CHARS: usize = 300;
const EXCERPT_CHARS: usize = 160;
const MIN_EXCERPT_CHARS: usize = 120;

pub fn seo_score(content: &str, title: &str) -> Score {
    let mut score: i32 = 0;

    if TITLE_LEN_RANGE.contains(&char_len(title)) {
        score += 20;
    }
    if contains_any(title, &LOCAL_TERMS) {
        score += 10;
    }
    if char_len(content) >= MIN_CONTENT_CHARS {
        score += 20;
    }
    if let Some(lead) = title.split_whitespace().next() {
        if content.contains(lead) {
            score += 15;
        }
    }
    if contains_any(content, &NEWS_TERMS) {
        score += 10;
    }
    if has_bengali_year(content) {
        score += 10;
    }
    if char_len(prefix_chars(content, EXCERPT_CHARS)) >= MIN_EXCERPT_CHARS {
        score += 15;
    }

    clamp_score(score)
}
