pub mod ad_safety;
pub mod engagement;
pub mod image;
pub mod originality;
pub mod readability;
pub mod seo;

use crate::text::word_count;
use crate::types::config::{ScorerConfig, Weights};
use crate::types::metrics::{ContentInput, OverallScore, QualityMetrics, Score, MAX_SCORE};
use crate::types::report::{Finding, QualityGrade, ScoreReport};
use chrono::Utc;
use sha2::{Digest, Sha256};

pub fn compute_quality_metrics(input: &ContentInput, config: &ScorerConfig) -> QualityMetrics {
    let content = input.content.as_str();
    let title = input.title.as_str();

    let metrics = QualityMetrics {
        word_count: word_count(content),
        readability_score: readability::readability_score(content),
        originality_score: originality::originality_score(content),
        image_quality: image::image_quality_score(input),
        user_engagement: engagement::engagement_score(content, title),
        seo_score: seo::seo_score(content, title),
        ad_safe_score: ad_safety::ad_safe_score(content, title, config.keywords()),
    };
    tracing::debug!(
        word_count = metrics.word_count,
        readability = metrics.readability_score,
        originality = metrics.originality_score,
        image = metrics.image_quality,
        engagement = metrics.user_engagement,
        seo = metrics.seo_score,
        ad_safety = metrics.ad_safe_score,
        "computed quality metrics"
    );
    metrics
}

pub fn compute_overall_score(metrics: &QualityMetrics, config: &ScorerConfig) -> OverallScore {
    OverallScore {
        overall_score: weighted_score(metrics, &config.weights()),
        is_ad_safe: metrics.ad_safe_score >= config.thresholds().ad_safe,
    }
}

/// Weighted mean of the sub-scores, rounded to nearest with ties toward
/// zero. Works in whole percentages so the weights stay exact.
pub fn weighted_score(metrics: &QualityMetrics, weights: &Weights) -> Score {
    let weighted: u64 = metrics
        .named_scores()
        .iter()
        .zip(weights.as_array())
        .map(|((_, score), weight)| u64::from(*score) * u64::from(weight))
        .sum();
    let total = weights.total().max(1);
    let rounded = (weighted + total / 2 - u64::from(total % 2 == 0)) / total;
    rounded.min(u64::from(MAX_SCORE)) as Score
}

/// Score with the built-in weights, thresholds and keyword table.
pub fn score(content: &str, title: &str, image_url: &str) -> (QualityMetrics, OverallScore) {
    let config = ScorerConfig::default();
    let input = ContentInput::new(content, title, image_url);
    let metrics = compute_quality_metrics(&input, &config);
    let overall = compute_overall_score(&metrics, &config);
    (metrics, overall)
}

pub fn analyze(input: &ContentInput, config: &ScorerConfig, source: Option<&str>) -> ScoreReport {
    let metrics = compute_quality_metrics(input, config);
    let overall = compute_overall_score(&metrics, config);
    let thresholds = config.thresholds();
    let grade = QualityGrade::from_score(
        overall.overall_score,
        thresholds.review,
        thresholds.excellent,
    );

    let mut findings = Vec::new();
    if !overall.is_ad_safe {
        findings.push(Finding {
            id: "ad_safety.unsafe".to_string(),
            title: "Not safe for ads".to_string(),
            body: format!(
                "Ad-safety score {} is below the threshold of {}; keep monetized placements off this article.",
                metrics.ad_safe_score, thresholds.ad_safe
            ),
            blocking: true,
        });
    }
    if matches!(grade, QualityGrade::NeedsReview) {
        findings.push(Finding {
            id: "overall.review".to_string(),
            title: "Editorial review needed".to_string(),
            body: format!(
                "Overall score {} is below the review threshold of {}.",
                overall.overall_score, thresholds.review
            ),
            blocking: false,
        });
    }
    for (name, value) in metrics.named_scores() {
        if value >= thresholds.weak_metric {
            continue;
        }
        // image has no partial credit, so only flag a missing image
        if name == "image" && input.has_image() {
            continue;
        }
        if name == "ad_safety" && !overall.is_ad_safe {
            continue;
        }
        findings.push(Finding {
            id: format!("metric.{name}.weak"),
            title: format!("Weak {name} score"),
            body: weak_metric_advice(name, value),
            blocking: false,
        });
    }

    tracing::info!(
        source = source.unwrap_or("<inline>"),
        overall = overall.overall_score,
        ad_safe = overall.is_ad_safe,
        grade = grade.label(),
        "scored article"
    );

    ScoreReport {
        source: source.map(str::to_string),
        content_digest: content_digest(input),
        scored_at: Utc::now(),
        metrics,
        overall,
        grade,
        findings,
    }
}

fn weak_metric_advice(name: &str, value: Score) -> String {
    let hint = match name {
        "readability" => "use shorter sentences and simpler words, or expand the article",
        "originality" => "add more complete Bengali sentences in the article's own words",
        "image" => "attach a lead image",
        "engagement" => "address the reader directly and include concrete figures",
        "seo" => "keep the title between 30 and 60 characters and repeat its lead word in the body",
        _ => "review the article",
    };
    format!("Scored {value}: {hint}.")
}

/// Stable fingerprint of an input, so callers can skip rescoring unchanged text.
pub fn content_digest(input: &ContentInput) -> String {
    let mut hasher = Sha256::new();
    for part in [&input.title, &input.content, &input.image_url] {
        hasher.update((part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}
