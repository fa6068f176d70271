use serde::{Serialize, Serializer};

pub type Score = u8;

pub const SCORE_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub engagement: f64,
    pub adoption: f64,
    pub support: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            engagement: 0.40,
            adoption: 0.40,
            support: 0.20,
        }
    }
}

/// Component scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub engagement: Score,
    pub adoption: f64,
    pub support: Score,
}

impl SubScores {
    pub fn new(engagement: Score, adoption: f64, support: Score) -> Self {
        Self {
            engagement,
            adoption,
            support,
        }
    }

    /// Weighted sum rounded half-up and clamped to [0, 100].
    pub fn overall(&self, weights: &Weights) -> Score {
        let raw = (f64::from(self.engagement) * weights.engagement)
            + (self.adoption * weights.adoption)
            + (f64::from(self.support) * weights.support);
        raw.round().clamp(0.0, SCORE_MAX) as Score
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    AtRisk,
    Critical,
}

impl HealthStatus {
    pub fn from_score(score: Score) -> Self {
        if score >= 75 {
            Self::Healthy
        } else if score >= 50 {
            Self::AtRisk
        } else {
            Self::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::AtRisk => "At Risk",
            Self::Critical => "Critical",
        }
    }

    pub const ALL: [HealthStatus; 3] = [Self::Healthy, Self::AtRisk, Self::Critical];
}

impl Serialize for HealthStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Update payload for one client, keyed by `page_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    #[serde(rename = "page_id")]
    pub page_id: String,
    pub client_name: String,
    pub overall_health_score: Score,
    pub health_status: HealthStatus,
    pub expansion_ready: bool,
    pub needs_immediate_attention: bool,
    pub renewal_risk: bool,
    pub calculated_at: String,
    pub last_contact_days: i64,
    pub engagement_score: Score,
    #[serde(serialize_with = "whole_as_integer")]
    pub adoption_score: f64,
    pub support_health_score: Score,
    #[serde(skip)]
    pub days_to_renewal: i64,
    #[serde(skip)]
    pub current_arr: f64,
}

/// Whole numbers go out as `80`, not `80.0`.
fn whole_as_integer<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= SCORE_MAX {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
