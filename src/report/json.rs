use crate::types::scoring::ScoreResult;
use serde_json::json;

pub fn to_json(results: &[ScoreResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

/// Wraps each result as `{"json": result}` for workflow runtimes.
pub fn to_items(results: &[ScoreResult]) -> Result<String, serde_json::Error> {
    let items = results
        .iter()
        .map(|result| json!({ "json": result }))
        .collect::<Vec<_>>();
    serde_json::to_string_pretty(&items)
}
