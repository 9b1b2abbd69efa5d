use crate::types::metrics::{ContentInput, Score};

/// Fixed score for any article that carries an image. No pixel analysis.
pub const IMAGE_PRESENT_SCORE: Score = 85;

pub fn image_quality_score(input: &ContentInput) -> Score {
    if input.has_image() {
        IMAGE_PRESENT_SCORE
    } else {
        0
    }
}
