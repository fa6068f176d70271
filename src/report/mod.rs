pub mod json;
pub mod md;

use crate::error::ScoreError;
use crate::types::scoring::ScoreResult;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Items,
    Md,
}

pub fn render(results: &[ScoreResult], format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::to_json(results).map_err(ScoreError::Json),
        OutputFormat::Items => json::to_items(results).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(results)),
    }
}
