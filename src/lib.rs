//! Content quality and ad-safety scoring for Bengali news articles.
//!
//! Scoring is a pure function of the article text: six heuristic
//! sub-scores in `0..=100` are combined with fixed weights into an overall
//! score, and the ad-safety sub-score gates monetized placement.
//!
//! ```
//! let (metrics, overall) = sangbad::score("", "", "");
//! assert_eq!(metrics.word_count, 0);
//! assert_eq!(overall.overall_score, 27);
//! assert!(overall.is_ad_safe);
//! ```

pub mod analyze;
pub mod article;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod text;
pub mod types;

pub use analyze::{analyze, compute_overall_score, compute_quality_metrics, score};
pub use error::{Result, SangbadError};
pub use types::config::ScorerConfig;
pub use types::metrics::{ContentInput, OverallScore, QualityMetrics, Score};
