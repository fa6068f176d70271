use crate::error::{Result, ScoreError};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

pub const STDIN_PATH: &str = "-";

pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    if !path.exists() {
        return Err(ScoreError::PathNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Decodes a batch of pages from a bare array, an array of `{"json": ..}`
/// items, a query response with `results`, or a single page.
pub fn parse_pages(text: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Array(items) => Ok(items.into_iter().map(unwrap_item).collect()),
        Value::Object(mut object) => {
            if let Some(results) = object.remove("results") {
                return match results {
                    Value::Array(items) => Ok(items),
                    _ => Err(ScoreError::InvalidInput(
                        "\"results\" must be an array of pages".to_string(),
                    )),
                };
            }
            if object.contains_key("properties") || object.contains_key("id") {
                return Ok(vec![Value::Object(object)]);
            }
            Err(ScoreError::InvalidInput(
                "expected an array of pages, a query response or a single page".to_string(),
            ))
        }
        other => Err(ScoreError::InvalidInput(format!(
            "expected a JSON array or object, found {}",
            kind(&other)
        ))),
    }
}

/// Item envelopes may carry sibling keys (`pairedItem`, `binary`); only a
/// top-level `properties` or `id` marks the object as a page itself.
fn unwrap_item(item: Value) -> Value {
    match item {
        Value::Object(mut object)
            if object.get("json").is_some_and(Value::is_object)
                && !object.contains_key("properties")
                && !object.contains_key("id") =>
        {
            object.remove("json").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
