//! Accessors over a workspace page (`{"id": .., "properties": {..}}`).
//!
//! Every accessor tolerates any missing path segment and falls back to the
//! default documented on it. Nothing here fails.

use crate::dates::parse_date;
use crate::types::record::{ClientRecord, EngagementStatus};
use chrono::{DateTime, Utc};
use serde_json::Value;

pub const CLIENT_NAME: &str = "Client Name";
pub const ENGAGEMENT_STATUS: &str = "Engagement Status";
pub const FEATURE_ADOPTION_SCORE: &str = "Feature Adoption Score";
pub const CURRENT_ARR: &str = "Current ARR";
pub const SUPPORT_TICKETS: &str = "Support Tickets (past 4wks)";
pub const RENEWAL_DATE: &str = "Renewal Date";
pub const LAST_CONTACT_DATE: &str = "Last Contact Date";

/// Name that marks a row as not yet filled in.
pub const PLACEHOLDER_NAME: &str = "Unknown Client";

fn property<'a>(page: &'a Value, name: &str) -> Option<&'a Value> {
    page.get("properties").and_then(|properties| properties.get(name))
}

/// Joined `plain_text` of a title property. `None` when the property is
/// absent or its first fragment is empty.
pub fn title_text(page: &Value, name: &str) -> Option<String> {
    let fragments = property(page, name)?.get("title")?.as_array()?;
    first_fragment(fragments)?;
    let text = fragments
        .iter()
        .filter_map(|fragment| fragment.get("plain_text").and_then(Value::as_str))
        .collect::<String>();
    Some(text)
}

/// The first fragment alone decides whether a name is filled in; the rest
/// only extend the display name.
fn first_fragment(fragments: &[Value]) -> Option<&str> {
    fragments
        .first()
        .and_then(|fragment| fragment.get("plain_text"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

fn is_placeholder(page: &Value, name: &str) -> bool {
    property(page, name)
        .and_then(|prop| prop.get("title"))
        .and_then(Value::as_array)
        .and_then(|fragments| first_fragment(fragments))
        .is_some_and(|text| text == PLACEHOLDER_NAME)
}

/// First multi-select option, or the single-select option. `None` when
/// nothing is selected.
pub fn first_option(page: &Value, name: &str) -> Option<String> {
    let prop = property(page, name)?;
    let from_multi = prop
        .get("multi_select")
        .and_then(Value::as_array)
        .and_then(|options| options.first())
        .and_then(|option| option.get("name"))
        .and_then(Value::as_str);
    let from_single = || {
        prop.get("select")
            .and_then(|option| option.get("name"))
            .and_then(Value::as_str)
    };
    from_multi
        .or_else(from_single)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
}

/// Number property; 0 when absent or null.
pub fn number(page: &Value, name: &str) -> f64 {
    property(page, name)
        .and_then(|prop| prop.get("number"))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

/// Start of a date property. Unparseable values count as absent.
pub fn date_start(page: &Value, name: &str) -> Option<DateTime<Utc>> {
    let raw = property(page, name)?
        .get("date")?
        .get("start")?
        .as_str()?;
    let parsed = parse_date(raw);
    if parsed.is_none() {
        tracing::warn!(property = name, value = raw, "ignoring unparseable date");
    }
    parsed
}

pub fn page_id(page: &Value) -> String {
    page.get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Builds a record from a page, or `None` when the client name cannot be
/// resolved.
pub fn client_record(page: &Value) -> Option<ClientRecord> {
    if is_placeholder(page, CLIENT_NAME) {
        return None;
    }
    let name = title_text(page, CLIENT_NAME)?;

    let engagement = first_option(page, ENGAGEMENT_STATUS)
        .map(|label| EngagementStatus::from_label(&label))
        .unwrap_or_default();

    Some(ClientRecord {
        engagement,
        feature_adoption: number(page, FEATURE_ADOPTION_SCORE),
        current_arr: number(page, CURRENT_ARR),
        support_tickets: number(page, SUPPORT_TICKETS),
        renewal_date: date_start(page, RENEWAL_DATE),
        last_contact: date_start(page, LAST_CONTACT_DATE),
        ..ClientRecord::new(page_id(page), name)
    })
}
