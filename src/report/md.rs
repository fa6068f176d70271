use crate::types::scoring::{HealthStatus, ScoreResult};

pub fn to_markdown(results: &[ScoreResult]) -> String {
    let mut output = String::new();
    output.push_str("# Customer Health Report\n\n");
    output.push_str(&format!("Clients scored: {}\n\n", results.len()));

    output.push_str("## Health Status\n\n");
    for status in HealthStatus::ALL {
        let matching = results
            .iter()
            .filter(|result| result.health_status == status)
            .collect::<Vec<_>>();
        let arr: f64 = matching.iter().map(|result| result.current_arr).sum();
        output.push_str(&format!(
            "- {}: {} (ARR {:.2})\n",
            status.label(),
            matching.len(),
            arr
        ));
    }
    output.push('\n');

    output.push_str("## Flags\n\n");
    output.push_str(&format!(
        "- expansion ready: {}\n- needs attention: {}\n- renewal risk: {}\n\n",
        count(results, |result| result.expansion_ready),
        count(results, |result| result.needs_immediate_attention),
        count(results, |result| result.renewal_risk)
    ));

    output.push_str("## Clients\n\n");
    if results.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    output.push_str(
        "| Client | Score | Status | Engagement | Adoption | Support | Last contact (days) | Renewal (days) | Flags |\n",
    );
    output.push_str("|---|---|---|---|---|---|---|---|---|\n");
    for result in results {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
            escape_cell(&result.client_name),
            result.overall_health_score,
            result.health_status.label(),
            result.engagement_score,
            result.adoption_score,
            result.support_health_score,
            result.last_contact_days,
            result.days_to_renewal,
            flags(result)
        ));
    }

    output
}

fn count(results: &[ScoreResult], predicate: impl Fn(&ScoreResult) -> bool) -> usize {
    results.iter().filter(|result| predicate(*result)).count()
}

fn flags(result: &ScoreResult) -> String {
    let mut flags = Vec::new();
    if result.expansion_ready {
        flags.push("expansion");
    }
    if result.needs_immediate_attention {
        flags.push("attention");
    }
    if result.renewal_risk {
        flags.push("renewal-risk");
    }
    if flags.is_empty() {
        "-".to_string()
    } else {
        flags.join(", ")
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
