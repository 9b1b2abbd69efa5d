pub mod json;
pub mod md;

use crate::error::SangbadError;
use crate::types::report::{BatchReport, ScoreReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, SangbadError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(SangbadError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_batch(batch: &BatchReport, format: OutputFormat) -> Result<String, SangbadError> {
    match format {
        OutputFormat::Json => json::to_json(batch).map_err(SangbadError::Json),
        OutputFormat::Md => Ok(md::batch_to_markdown(batch)),
    }
}
