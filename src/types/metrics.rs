use serde::{Deserialize, Serialize};

/// A normalized score in `0..=100`.
pub type Score = u8;

pub const MAX_SCORE: Score = 100;

/// Clamp an intermediate value into the score range.
pub fn clamp_score(value: i32) -> Score {
    value.clamp(0, i32::from(MAX_SCORE)) as Score
}

/// Clamp and round a fractional intermediate value.
pub fn clamp_score_f64(value: f64) -> Score {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, f64::from(MAX_SCORE)).round() as Score
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentInput {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: String,
}

impl ContentInput {
    pub fn new(
        content: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            title: title.into(),
            image_url: image_url.into(),
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    pub word_count: usize,
    pub readability_score: Score,
    pub originality_score: Score,
    pub image_quality: Score,
    pub user_engagement: Score,
    pub seo_score: Score,
    pub ad_safe_score: Score,
}

impl QualityMetrics {
    /// Sub-scores paired with their stable names, in weighting order.
    pub fn named_scores(&self) -> [(&'static str, Score); 6] {
        [
            ("readability", self.readability_score),
            ("originality", self.originality_score),
            ("image", self.image_quality),
            ("engagement", self.user_engagement),
            ("seo", self.seo_score),
            ("ad_safety", self.ad_safe_score),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallScore {
    pub overall_score: Score,
    pub is_ad_safe: bool,
}
