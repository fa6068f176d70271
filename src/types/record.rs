use chrono::{DateTime, Utc};

/// Engagement level as labelled upstream. Labels are matched exactly;
/// anything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngagementStatus {
    HighlyEngaged,
    Engaged,
    Passive,
    Disengaged,
    Other(String),
}

impl EngagementStatus {
    pub const UNKNOWN: &'static str = "Unknown";

    pub fn from_label(label: &str) -> Self {
        match label {
            "Highly Engaged" => Self::HighlyEngaged,
            "Engaged" => Self::Engaged,
            "Passive" => Self::Passive,
            "Disengaged" => Self::Disengaged,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::HighlyEngaged => "Highly Engaged",
            Self::Engaged => "Engaged",
            Self::Passive => "Passive",
            Self::Disengaged => "Disengaged",
            Self::Other(label) => label,
        }
    }

    pub fn is_engaged(&self) -> bool {
        matches!(self, Self::HighlyEngaged | Self::Engaged)
    }

    pub fn is_disengaged(&self) -> bool {
        matches!(self, Self::Passive | Self::Disengaged)
    }
}

impl Default for EngagementStatus {
    fn default() -> Self {
        Self::Other(Self::UNKNOWN.to_string())
    }
}

/// One client row after defaults have been applied to every optional field
/// except the two dates, whose absence carries meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    pub engagement: EngagementStatus,
    /// Raw upstream value; not clamped.
    pub feature_adoption: f64,
    pub current_arr: f64,
    /// Tickets opened in the trailing four weeks.
    pub support_tickets: f64,
    pub renewal_date: Option<DateTime<Utc>>,
    pub last_contact: Option<DateTime<Utc>>,
}

impl ClientRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            engagement: EngagementStatus::default(),
            feature_adoption: 0.0,
            current_arr: 0.0,
            support_tickets: 0.0,
            renewal_date: None,
            last_contact: None,
        }
    }
}
