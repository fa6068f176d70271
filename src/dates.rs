use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
/// Days to renewal assumed when no renewal date is recorded.
pub const DEFAULT_RENEWAL_DAYS: i64 = 365;
/// Days since contact reported when no contact date is recorded.
pub const UNKNOWN_CONTACT_DAYS: i64 = 999;

/// Parses a workspace date value: RFC 3339, a naive timestamp (taken as
/// UTC) or a bare `YYYY-MM-DD` (UTC midnight).
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Ceiling of `millis / one day`, also for negative spans.
pub fn ceil_days(millis: i64) -> i64 {
    let whole = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        whole
    } else {
        whole + 1
    }
}

pub fn days_to_renewal(renewal: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    match renewal {
        Some(date) => ceil_days(date.signed_duration_since(now).num_milliseconds()).max(0),
        None => DEFAULT_RENEWAL_DAYS,
    }
}

pub fn days_since_contact(last_contact: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    match last_contact {
        Some(date) => ceil_days(now.signed_duration_since(date).num_milliseconds()),
        None => UNKNOWN_CONTACT_DAYS,
    }
}
