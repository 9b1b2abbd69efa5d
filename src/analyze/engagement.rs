use crate::text::{contains_any, has_bengali_digit};
use crate::types::metrics::{clamp_score, Score};

const BASE: i32 = 50;
const DIRECT_ADDRESS: [&str; 2] = ["আপনি", "আমরা"];
const FRESHNESS: [&str; 3] = ["নতুন", "আজ", "সর্বশেষ"];

pub fn engagement_score(content: &str, title: &str) -> Score {
    let mut score = BASE;
    if title.contains('?') {
        score += 10;
    }
    if contains_any(content, &DIRECT_ADDRESS) {
        score += 15;
    }
    if has_bengali_digit(content) {
        score += 10;
    }
    if contains_any(content, &FRESHNESS) {
        score += 15;
    }
    clamp_score(score)
}
