use crate::text::{char_len, sentences, words};
use crate::types::metrics::{clamp_score, Score};

const LONG_SENTENCE_WORDS: f64 = 20.0;
const COMPLEX_WORD_CHARS: usize = 8;
const COMPLEX_RATIO_LIMIT: f64 = 0.3;
const SHORT_ARTICLE_WORDS: usize = 200;

pub fn readability_score(content: &str) -> Score {
    if content.is_empty() {
        return 0;
    }

    let words = words(content);
    let word_count = words.len();
    let sentence_count = sentences(content).len().max(1);
    let avg_words_per_sentence = word_count as f64 / sentence_count as f64;
    let complex_words = words
        .iter()
        .filter(|word| char_len(word) > COMPLEX_WORD_CHARS)
        .count();
    let complexity_ratio = if word_count == 0 {
        0.0
    } else {
        complex_words as f64 / word_count as f64
    };

    let mut score: i32 = 100;
    if avg_words_per_sentence > LONG_SENTENCE_WORDS {
        score -= 20;
    }
    if complexity_ratio > COMPLEX_RATIO_LIMIT {
        score -= 30;
    }
    if word_count < SHORT_ARTICLE_WORDS {
        score -= 20;
    }
    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_passage(sentences: usize) -> String {
        "আমি ভাত খাই। ".repeat(sentences)
    }

    #[test]
    fn only_empty_content_scores_zero() {
        assert_eq!(readability_score(""), 0);
    }

    #[test]
    fn blank_content_loses_only_length_points() {
        assert_eq!(readability_score("   \n\t"), 80);
        assert_eq!(readability_score("!!!"), 80);
    }

    #[test]
    fn short_simple_passage_loses_only_length_points() {
        let passage = simple_passage(50);
        assert_eq!(crate::text::word_count(&passage), 150);
        assert_eq!(readability_score(&passage), 80);
    }

    #[test]
    fn long_simple_passage_scores_full_marks() {
        assert_eq!(readability_score(&simple_passage(70)), 100);
    }

    #[test]
    fn run_on_sentences_are_penalized() {
        let passage = format!("{}।", "আমি ভাত খাই ".repeat(70));
        assert_eq!(readability_score(&passage), 80);
    }

    #[test]
    fn complex_words_are_measured_in_code_points() {
        // 10 code points, 30 bytes
        let passage = "বাংলাদেশের মানুষ। ".repeat(10);
        assert_eq!(readability_score(&passage), 50);

        // 8 code points is not complex
        let passage = "বাংলাদেশ মানুষ। ".repeat(10);
        assert_eq!(readability_score(&passage), 80);
    }

    #[test]
    fn all_penalties_stack() {
        let passage = format!("{}।", "বাংলাদেশের ".repeat(30));
        assert_eq!(readability_score(&passage), 30);
    }
}
