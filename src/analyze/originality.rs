use crate::text::{char_len, phrases};
use crate::types::metrics::{clamp_score_f64, Score};

/// Rewards many, longer Bengali phrases. Text with no terminated Bengali
/// phrase scores 0.
pub fn originality_score(content: &str) -> Score {
    let phrases = phrases(content);
    if phrases.is_empty() {
        return 0;
    }

    let phrase_count = phrases.len() as f64;
    let total_len: usize = phrases.iter().map(|phrase| char_len(phrase)).sum();
    let avg_phrase_len = total_len as f64 / phrase_count;

    clamp_score_f64(avg_phrase_len * 2.0 + phrase_count * 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_phrases_scores_zero_instead_of_nan() {
        assert_eq!(originality_score(""), 0);
        assert_eq!(originality_score("no bengali here."), 0);
        assert_eq!(originality_score("আমি ভাত খাই"), 0);
    }

    #[test]
    fn score_combines_average_length_and_count() {
        // "খাই।" is 4 code points: 4 * 2 + 1 * 3
        assert_eq!(originality_score("আমি ভাত খাই।"), 11);
        // two phrases of 4 code points: 4 * 2 + 2 * 3
        assert_eq!(originality_score("আমি ভাত খাই। তুমি কী খাও?"), 14);
    }

    #[test]
    fn score_is_capped_at_one_hundred() {
        let passage = "আমি ভাত খাই। ".repeat(40);
        assert_eq!(originality_score(&passage), 100);
    }
}
