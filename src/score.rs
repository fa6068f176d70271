//! The health score calculator: one client record in, one update payload out.

use crate::dates::{days_since_contact, days_to_renewal};
use crate::extract;
use crate::types::record::{ClientRecord, EngagementStatus};
use crate::types::scoring::{HealthStatus, Score, ScoreResult, SubScores, Weights, SCORE_MAX};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

pub fn engagement_score(status: &EngagementStatus) -> Score {
    match status {
        EngagementStatus::HighlyEngaged => 90,
        EngagementStatus::Engaged => 70,
        EngagementStatus::Passive => 40,
        EngagementStatus::Disengaged => 20,
        EngagementStatus::Other(_) => 50,
    }
}

pub fn adoption_score(feature_adoption: f64) -> f64 {
    feature_adoption.clamp(0.0, SCORE_MAX)
}

/// Fewer tickets score higher. Bands are checked from the highest
/// threshold down.
pub fn support_health_score(tickets: f64) -> Score {
    if tickets > 10.0 {
        30
    } else if tickets > 5.0 {
        60
    } else if tickets > 2.0 {
        80
    } else {
        100
    }
}

pub fn expansion_ready(record: &ClientRecord) -> bool {
    record.feature_adoption >= 70.0
        && record.engagement.is_engaged()
        && record.support_tickets <= 3.0
}

pub fn needs_attention(
    record: &ClientRecord,
    overall: Score,
    days_to_renewal: i64,
    last_contact_days: i64,
) -> bool {
    overall < 60
        || (days_to_renewal <= 60 && overall < 75)
        || last_contact_days > 30
        || record.feature_adoption < 40.0
        || record.engagement.is_disengaged()
        || record.support_tickets > 5.0
}

/// Only evaluated inside the 90-day renewal window.
pub fn renewal_risk(
    record: &ClientRecord,
    overall: Score,
    days_to_renewal: i64,
    last_contact_days: i64,
) -> bool {
    days_to_renewal <= 90
        && (overall < 70
            || last_contact_days > 21
            || record.feature_adoption < 50.0
            || record.engagement.is_disengaged()
            || record.support_tickets > 3.0)
}

pub fn compute(record: &ClientRecord, now: DateTime<Utc>, weights: &Weights) -> ScoreResult {
    let renewal_days = days_to_renewal(record.renewal_date, now);
    let last_contact_days = days_since_contact(record.last_contact, now);

    let sub_scores = SubScores::new(
        engagement_score(&record.engagement),
        adoption_score(record.feature_adoption),
        support_health_score(record.support_tickets),
    );
    let overall = sub_scores.overall(weights);
    let health_status = HealthStatus::from_score(overall);
    tracing::debug!(
        page_id = %record.id,
        engagement = record.engagement.label(),
        overall,
        status = health_status.label(),
        "scored client"
    );

    ScoreResult {
        page_id: record.id.clone(),
        client_name: record.name.clone(),
        overall_health_score: overall,
        health_status,
        expansion_ready: expansion_ready(record),
        needs_immediate_attention: needs_attention(
            record,
            overall,
            renewal_days,
            last_contact_days,
        ),
        renewal_risk: renewal_risk(record, overall, renewal_days, last_contact_days),
        calculated_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        last_contact_days,
        engagement_score: sub_scores.engagement,
        adoption_score: sub_scores.adoption,
        support_health_score: sub_scores.support,
        days_to_renewal: renewal_days,
        current_arr: record.current_arr,
    }
}

pub fn compute_page(page: &Value, now: DateTime<Utc>, weights: &Weights) -> Option<ScoreResult> {
    extract::client_record(page).map(|record| compute(&record, now, weights))
}

/// Scores every resolvable page, keeping input order.
pub fn compute_batch(pages: &[Value], now: DateTime<Utc>, weights: &Weights) -> Vec<ScoreResult> {
    let results = pages
        .iter()
        .filter_map(|page| {
            let result = compute_page(page, now, weights);
            if result.is_none() {
                tracing::debug!(page_id = %extract::page_id(page), "skipping page without client name");
            }
            result
        })
        .collect::<Vec<_>>();
    tracing::info!(
        input = pages.len(),
        scored = results.len(),
        skipped = pages.len() - results.len(),
        "scored batch"
    );
    results
}
