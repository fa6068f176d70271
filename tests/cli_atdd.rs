#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const NOW: &str = "2026-10-19T12:00:00Z";

const PAGES: &str = r#"[
  {
    "json": {
      "id": "page-healthy",
      "properties": {
        "Client Name": { "title": [{ "plain_text": "Acme" }] },
        "Engagement Status": { "multi_select": [{ "name": "Highly Engaged" }] },
        "Feature Adoption Score": { "number": 80 },
        "Current ARR": { "number": 90000 },
        "Support Tickets (past 4wks)": { "number": 1 },
        "Renewal Date": { "date": { "start": "2027-06-01" } },
        "Last Contact Date": { "date": { "start": "2026-10-15" } }
      }
    }
  },
  {
    "json": {
      "id": "page-unnamed",
      "properties": {
        "Client Name": { "title": [{ "plain_text": "Unknown Client" }] },
        "Feature Adoption Score": { "number": 99 }
      }
    }
  },
  {
    "json": {
      "id": "page-critical",
      "properties": {
        "Client Name": { "title": [{ "plain_text": "Globex" }] },
        "Engagement Status": { "multi_select": [{ "name": "Disengaged" }] },
        "Feature Adoption Score": { "number": 30 },
        "Current ARR": { "number": 12000 },
        "Support Tickets (past 4wks)": { "number": 12 },
        "Renewal Date": { "date": { "start": "2026-11-18" } }
      }
    }
  }
]"#;

fn workspace() -> TempDir {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("pages.json"), PAGES).expect("pages should write");
    dir
}

fn health_score(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("health-score").expect("binary should compile");
    cmd.current_dir(dir).env("HOME", dir).env_remove("RUST_LOG");
    cmd
}

fn parse_stdout(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout should be json")
}

#[test]
fn score_emits_one_payload_per_named_client() {
    let dir = workspace();
    let output = health_score(dir.path())
        .args(["score", "pages.json", "--now", NOW])
        .output()
        .expect("binary should run");
    assert!(output.status.success());

    let value = parse_stdout(&output.stdout);
    let results = value.as_array().expect("results should be an array");
    assert_eq!(results.len(), 2);

    let healthy = &results[0];
    assert_eq!(healthy["page_id"], "page-healthy");
    assert_eq!(healthy["clientName"], "Acme");
    assert_eq!(healthy["overallHealthScore"], 88);
    assert_eq!(healthy["healthStatus"], "Healthy");
    assert_eq!(healthy["expansionReady"], true);
    assert_eq!(healthy["needsImmediateAttention"], false);
    assert_eq!(healthy["renewalRisk"], false);
    assert_eq!(healthy["lastContactDays"], 5);
    assert_eq!(healthy["calculatedAt"], "2026-10-19T12:00:00.000Z");

    let critical = &results[1];
    assert_eq!(critical["page_id"], "page-critical");
    assert_eq!(critical["overallHealthScore"], 26);
    assert_eq!(critical["healthStatus"], "Critical");
    assert_eq!(critical["needsImmediateAttention"], true);
    assert_eq!(critical["renewalRisk"], true);
    assert_eq!(critical["lastContactDays"], 999);
    assert_eq!(critical["engagementScore"], 20);
    assert_eq!(critical["adoptionScore"], 30);
    assert!(String::from_utf8_lossy(&output.stdout).contains("\"adoptionScore\": 30,"));
    assert_eq!(critical["supportHealthScore"], 30);
}

#[test]
fn score_items_format_wraps_payloads() {
    let dir = workspace();
    let output = health_score(dir.path())
        .args(["score", "pages.json", "--now", NOW, "--format", "items"])
        .output()
        .expect("binary should run");
    assert!(output.status.success());

    let value = parse_stdout(&output.stdout);
    assert_eq!(value[0]["json"]["page_id"], "page-healthy");
    assert_eq!(value[1]["json"]["page_id"], "page-critical");
}

#[test]
fn score_unwraps_items_with_paired_item_keys() {
    let dir = workspace();
    let paired = r#"[
      {
        "json": {
          "id": "page-paired",
          "properties": {
            "Client Name": { "title": [{ "plain_text": "Initech" }] },
            "Engagement Status": { "multi_select": [{ "name": "Engaged" }] },
            "Feature Adoption Score": { "number": 70 }
          }
        },
        "pairedItem": { "item": 0 }
      }
    ]"#;
    fs::write(dir.path().join("paired.json"), paired).expect("input should write");

    let output = health_score(dir.path())
        .args(["score", "paired.json", "--now", NOW])
        .output()
        .expect("binary should run");
    assert!(output.status.success());

    let value = parse_stdout(&output.stdout);
    let results = value.as_array().expect("results should be an array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["page_id"], "page-paired");
    assert_eq!(results[0]["clientName"], "Initech");
}

#[test]
fn score_reads_stdin() {
    let dir = workspace();
    health_score(dir.path())
        .args(["score", "-", "--now", NOW])
        .write_stdin(PAGES)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"page_id\": \"page-critical\""));
}

#[test]
fn score_markdown_summarises_statuses() {
    let dir = workspace();
    health_score(dir.path())
        .args(["score", "pages.json", "--now", NOW, "--format", "md"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Customer Health Report"))
        .stdout(predicate::str::contains("- Healthy: 1 (ARR 90000.00)"))
        .stdout(predicate::str::contains("- Critical: 1 (ARR 12000.00)"))
        .stdout(predicate::str::contains("Unknown Client").not());
}

#[test]
fn score_uses_configured_format_and_weights() {
    let dir = workspace();
    fs::write(
        dir.path().join("health-score.toml"),
        r#"
[scoring.weights]
engagement = 1.0
adoption = 0.0
support = 0.0

[output]
format = "items"
"#,
    )
    .expect("config should write");

    let output = health_score(dir.path())
        .args(["score", "pages.json", "--now", NOW])
        .output()
        .expect("binary should run");
    assert!(output.status.success());

    let value = parse_stdout(&output.stdout);
    assert_eq!(value[0]["json"]["overallHealthScore"], 90);
    assert_eq!(value[1]["json"]["overallHealthScore"], 20);
}

#[test]
fn score_rejects_invalid_config() {
    let dir = workspace();
    fs::write(
        dir.path().join("health-score.toml"),
        "[scoring.weights]\nengagement = 0.9\n",
    )
    .expect("config should write");

    health_score(dir.path())
        .args(["score", "pages.json", "--now", NOW])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("must sum to 1.0"));
}

#[test]
fn score_reports_missing_input() {
    let dir = workspace();
    health_score(dir.path())
        .args(["score", "absent.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn score_rejects_unrecognised_input_shape() {
    let dir = workspace();
    fs::write(dir.path().join("bad.json"), r#"{"foo": 1}"#).expect("input should write");
    health_score(dir.path())
        .args(["score", "bad.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn score_rejects_invalid_now() {
    let dir = workspace();
    health_score(dir.path())
        .args(["score", "pages.json", "--now", "tomorrow"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid timestamp"));
}

#[test]
fn skipped_pages_are_logged_at_debug() {
    let dir = workspace();
    health_score(dir.path())
        .args(["-vv", "score", "pages.json", "--now", NOW])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("skipping page without client name"))
        .stderr(predicate::str::contains("page-unnamed"));
}
