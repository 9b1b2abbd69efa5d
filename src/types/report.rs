use crate::types::metrics::{OverallScore, QualityMetrics, Score};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityGrade {
    Excellent,
    Good,
    NeedsReview,
}

impl QualityGrade {
    pub fn from_score(score: Score, review: Score, excellent: Score) -> Self {
        if score >= excellent {
            QualityGrade::Excellent
        } else if score >= review {
            QualityGrade::Good
        } else {
            QualityGrade::NeedsReview
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualityGrade::Excellent => "excellent",
            QualityGrade::Good => "good",
            QualityGrade::NeedsReview => "needs review",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub content_digest: String,
    pub scored_at: DateTime<Utc>,
    pub metrics: QualityMetrics,
    #[serde(flatten)]
    pub overall: OverallScore,
    pub grade: QualityGrade,
    pub findings: Vec<Finding>,
}

impl ScoreReport {
    pub fn has_blocking(&self) -> bool {
        self.findings.iter().any(|finding| finding.blocking)
    }

    pub fn needs_review(&self) -> bool {
        matches!(self.grade, QualityGrade::NeedsReview)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub scored_at: DateTime<Utc>,
    pub article_count: usize,
    pub ad_safe_count: usize,
    pub average_overall_score: f32,
    pub articles: Vec<ScoreReport>,
}

impl BatchReport {
    pub fn new(articles: Vec<ScoreReport>) -> Self {
        let article_count = articles.len();
        let ad_safe_count = articles
            .iter()
            .filter(|article| article.overall.is_ad_safe)
            .count();
        let average_overall_score = if article_count == 0 {
            0.0
        } else {
            articles
                .iter()
                .map(|article| f32::from(article.overall.overall_score))
                .sum::<f32>()
                / article_count as f32
        };
        Self {
            scored_at: Utc::now(),
            article_count,
            ad_safe_count,
            average_overall_score,
            articles,
        }
    }

    pub fn has_blocking(&self) -> bool {
        self.articles.iter().any(ScoreReport::has_blocking)
    }

    pub fn needs_review(&self) -> bool {
        self.articles.iter().any(ScoreReport::needs_review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_boundaries_are_inclusive() {
        assert_eq!(QualityGrade::from_score(80, 60, 80), QualityGrade::Excellent);
        assert_eq!(QualityGrade::from_score(79, 60, 80), QualityGrade::Good);
        assert_eq!(QualityGrade::from_score(60, 60, 80), QualityGrade::Good);
        assert_eq!(QualityGrade::from_score(59, 60, 80), QualityGrade::NeedsReview);
    }

    #[test]
    fn empty_batch_has_zero_average() {
        let batch = BatchReport::new(vec![]);
        assert_eq!(batch.article_count, 0);
        assert_eq!(batch.average_overall_score, 0.0);
        assert!(!batch.has_blocking());
    }
}
