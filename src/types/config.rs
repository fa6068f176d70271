use crate::error::ScoreError;
use crate::report::OutputFormat;
use crate::types::scoring::Weights;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreConfig {
    pub scoring: Option<ScoringConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub weights: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

const ALLOWED_WEIGHT_KEYS: [&str; 3] = ["engagement", "adoption", "support"];

impl ScoreConfig {
    pub fn weights(&self) -> Weights {
        let defaults = Weights::default();
        match self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.weights.as_ref())
        {
            Some(weights) => Weights {
                engagement: *weights.get("engagement").unwrap_or(&defaults.engagement),
                adoption: *weights.get("adoption").unwrap_or(&defaults.adoption),
                support: *weights.get("support").unwrap_or(&defaults.support),
            },
            None => defaults,
        }
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|output| output.format)
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        if let Some(weights) = self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.weights.as_ref())
        {
            let mut unknown = weights
                .keys()
                .filter(|key| !ALLOWED_WEIGHT_KEYS.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(ScoreError::ConfigParse(format!(
                    "scoring.weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.weights();
        let values = [weights.engagement, weights.adoption, weights.support];
        if values.iter().any(|weight| !(0.0..=1.0).contains(weight)) {
            return Err(ScoreError::ConfigParse(
                "scoring.weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum: f64 = values.iter().sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(ScoreError::ConfigParse(format!(
                "scoring.weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        Ok(())
    }
}
