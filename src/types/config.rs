use crate::error::SangbadError;
use crate::types::metrics::{Score, MAX_SCORE};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScorerConfig {
    pub weights: Option<WeightsConfig>,
    pub thresholds: Option<ThresholdsConfig>,
    pub keywords: Option<Vec<KeywordEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    pub readability: Option<u32>,
    pub originality: Option<u32>,
    pub image: Option<u32>,
    pub engagement: Option<u32>,
    pub seo: Option<u32>,
    pub ad_safety: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    pub ad_safe: Option<Score>,
    pub review: Option<Score>,
    pub excellent: Option<Score>,
    pub weak_metric: Option<Score>,
}

/// Sub-score weights as whole percentages. A valid set sums to exactly 100,
/// which keeps the fractional weights summing to exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Weights {
    pub readability: u32,
    pub originality: u32,
    pub image: u32,
    pub engagement: u32,
    pub seo: u32,
    pub ad_safety: u32,
}

pub const WEIGHT_SCALE: u32 = 100;

pub const DEFAULT_WEIGHTS: Weights = Weights {
    readability: 20,
    originality: 20,
    image: 10,
    engagement: 15,
    seo: 15,
    ad_safety: 20,
};

impl Weights {
    /// Same order as `QualityMetrics::named_scores`.
    pub fn as_array(&self) -> [u32; 6] {
        [
            self.readability,
            self.originality,
            self.image,
            self.engagement,
            self.seo,
            self.ad_safety,
        ]
    }

    pub fn total(&self) -> u64 {
        self.as_array().iter().copied().map(u64::from).sum()
    }

    pub fn fractions(&self) -> [f64; 6] {
        self.as_array()
            .map(|weight| f64::from(weight) / f64::from(WEIGHT_SCALE))
    }
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    pub ad_safe: Score,
    pub review: Score,
    pub excellent: Score,
    pub weak_metric: Score,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ad_safe: 80,
            review: 60,
            excellent: 80,
            weak_metric: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    Violent,
    Controversial,
    Adult,
    Positive,
}

impl KeywordCategory {
    pub fn is_penalty(self) -> bool {
        !matches!(self, KeywordCategory::Positive)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KeywordCategory::Violent => "violent",
            KeywordCategory::Controversial => "controversial",
            KeywordCategory::Adult => "adult",
            KeywordCategory::Positive => "positive",
        }
    }
}

/// One row of the ad-safety keyword table. Entries sharing a `group`
/// contribute their weight once when any member is present; ungrouped
/// entries stand alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub term: String,
    pub category: KeywordCategory,
    pub weight: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl KeywordEntry {
    pub fn new(term: &str, category: KeywordCategory, weight: i32) -> Self {
        Self {
            term: term.to_string(),
            category,
            weight,
            group: None,
        }
    }

    pub fn grouped(term: &str, category: KeywordCategory, weight: i32, group: &str) -> Self {
        Self {
            group: Some(group.to_string()),
            ..Self::new(term, category, weight)
        }
    }

    pub fn group_key(&self) -> &str {
        self.group.as_deref().unwrap_or(&self.term)
    }
}

pub static DEFAULT_KEYWORDS: LazyLock<Vec<KeywordEntry>> = LazyLock::new(|| {
    use KeywordCategory::*;
    vec![
        KeywordEntry::new("হত্যা", Violent, -15),
        KeywordEntry::new("খুন", Violent, -15),
        KeywordEntry::new("মৃত্যু", Violent, -15),
        KeywordEntry::new("রক্ত", Violent, -15),
        KeywordEntry::new("যুদ্ধ", Violent, -15),
        KeywordEntry::new("বোমা", Violent, -15),
        KeywordEntry::new("রাজনীতি", Controversial, -5),
        KeywordEntry::new("দুর্নীতি", Controversial, -5),
        KeywordEntry::new("বিতর্ক", Controversial, -5),
        KeywordEntry::new("সংঘাত", Controversial, -5),
        KeywordEntry::new("যৌন", Adult, -30),
        KeywordEntry::new("অশ্লীল", Adult, -30),
        KeywordEntry::grouped("শিক্ষা", Positive, 5, "education_health"),
        KeywordEntry::grouped("স্বাস্থ্য", Positive, 5, "education_health"),
        KeywordEntry::grouped("প্রযুক্তি", Positive, 5, "technology_science"),
        KeywordEntry::grouped("বিজ্ঞান", Positive, 5, "technology_science"),
    ]
});

const ALLOWED_WEIGHT_KEYS: [&str; 6] = [
    "readability",
    "originality",
    "image",
    "engagement",
    "seo",
    "ad_safety",
];

impl ScorerConfig {
    pub fn weights(&self) -> Weights {
        let defaults = DEFAULT_WEIGHTS;
        match &self.weights {
            Some(weights) => Weights {
                readability: weights.readability.unwrap_or(defaults.readability),
                originality: weights.originality.unwrap_or(defaults.originality),
                image: weights.image.unwrap_or(defaults.image),
                engagement: weights.engagement.unwrap_or(defaults.engagement),
                seo: weights.seo.unwrap_or(defaults.seo),
                ad_safety: weights.ad_safety.unwrap_or(defaults.ad_safety),
            },
            None => defaults,
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();
        match &self.thresholds {
            Some(thresholds) => Thresholds {
                ad_safe: thresholds.ad_safe.unwrap_or(defaults.ad_safe),
                review: thresholds.review.unwrap_or(defaults.review),
                excellent: thresholds.excellent.unwrap_or(defaults.excellent),
                weak_metric: thresholds.weak_metric.unwrap_or(defaults.weak_metric),
            },
            None => defaults,
        }
    }

    pub fn keywords(&self) -> &[KeywordEntry] {
        self.keywords.as_deref().unwrap_or(DEFAULT_KEYWORDS.as_slice())
    }

    /// Copy of this config with `review` as the review threshold. The
    /// excellent threshold is raised to match when it would fall below.
    pub fn with_review_threshold(&self, review: Score) -> Self {
        let current = self.thresholds();
        Self {
            thresholds: Some(ThresholdsConfig {
                ad_safe: Some(current.ad_safe),
                review: Some(review),
                excellent: Some(current.excellent.max(review)),
                weak_metric: Some(current.weak_metric),
            }),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), SangbadError> {
        let weights = self.weights();
        if weights
            .as_array()
            .iter()
            .any(|weight| *weight > WEIGHT_SCALE)
        {
            return Err(SangbadError::ConfigParse(format!(
                "weights values must be between 0 and {WEIGHT_SCALE}"
            )));
        }
        if weights.total() != u64::from(WEIGHT_SCALE) {
            return Err(SangbadError::ConfigParse(format!(
                "weights must sum to {WEIGHT_SCALE} (found {})",
                weights.total()
            )));
        }

        let thresholds = self.thresholds();
        for (name, value) in [
            ("ad_safe", thresholds.ad_safe),
            ("review", thresholds.review),
            ("excellent", thresholds.excellent),
            ("weak_metric", thresholds.weak_metric),
        ] {
            if value > MAX_SCORE {
                return Err(SangbadError::ConfigParse(format!(
                    "thresholds.{name} must be between 0 and {MAX_SCORE}"
                )));
            }
        }
        if thresholds.review > thresholds.excellent {
            return Err(SangbadError::ConfigParse(
                "thresholds.review cannot exceed thresholds.excellent".to_string(),
            ));
        }

        if let Some(keywords) = &self.keywords {
            validate_keywords(keywords)?;
        }

        Ok(())
    }
}

/// Keys accepted under `[weights]`, for rejecting typos in raw TOML.
pub fn unknown_weight_keys(raw: &toml::Value) -> Vec<String> {
    raw.get("weights")
        .and_then(toml::Value::as_table)
        .map(|table| {
            table
                .keys()
                .filter(|key| !ALLOWED_WEIGHT_KEYS.contains(&key.as_str()))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

fn validate_keywords(keywords: &[KeywordEntry]) -> Result<(), SangbadError> {
    let mut seen = HashSet::<String>::new();
    let mut group_weights = HashMap::<&str, i32>::new();

    for entry in keywords {
        let term = entry.term.trim();
        if term.is_empty() {
            return Err(SangbadError::ConfigParse(
                "keywords entries must have a non-empty term".to_string(),
            ));
        }
        if !seen.insert(term.to_lowercase()) {
            return Err(SangbadError::ConfigParse(format!(
                "keywords contains duplicate term: {term}"
            )));
        }
        if entry.category.is_penalty() && entry.weight > 0 {
            return Err(SangbadError::ConfigParse(format!(
                "keyword '{term}' in category {} must carry a non-positive weight",
                entry.category.as_str()
            )));
        }
        if !entry.category.is_penalty() && entry.weight < 0 {
            return Err(SangbadError::ConfigParse(format!(
                "keyword '{term}' in category positive must carry a non-negative weight"
            )));
        }
        if let Some(group) = entry.group.as_deref() {
            match group_weights.get(group) {
                Some(existing) if *existing != entry.weight => {
                    return Err(SangbadError::ConfigParse(format!(
                        "keyword group '{group}' mixes weights {existing} and {}",
                        entry.weight
                    )));
                }
                Some(_) => {}
                None => {
                    group_weights.insert(group, entry.weight);
                }
            }
        }
    }

    Ok(())
}
