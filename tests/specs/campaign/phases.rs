//! Phase table specs

use crate::prelude::*;

#[test]
fn phase_table_with_durations() {
    Project::with_doc(RUNNING_DOC)
        .cpo()
        .args(&["phases", "campaign.json"])
        .passes()
        .stdout_eq(
            "PHASE        CONFIG   EXEC       STATUS     DURATION\n\
             discovery    valid    completed  completed  500ms\n\
             validation   valid    running    in_progress -\n\
             extraction   valid    idle       configured -\n\
             analysis     missing  idle       -          -\n",
        );
}

#[test]
fn phases_json_is_always_four_entries() {
    let run = Project::with_doc(r#"{ "campaign_id": "empty" }"#)
        .cpo()
        .args(&["phases", "campaign.json", "--format", "json"])
        .passes();
    let value = run.json();
    let phases = value.as_array().unwrap();
    let keys: Vec<&str> = phases.iter().map(|p| p["key"].as_str().unwrap()).collect();
    assert_eq!(keys, vec!["discovery", "validation", "extraction", "analysis"]);
    assert!(phases
        .iter()
        .all(|p| p["config_state"] == "missing" && p["exec_state"] == "idle"));
}

#[test]
fn failed_run_keeps_duration_and_error() {
    let run = Project::with_doc(FAILED_DOC)
        .cpo()
        .args(&["phases", "campaign.json", "--format", "json"])
        .passes();
    let value = run.json();
    assert_eq!(value[0]["duration_ms"], 250);
    assert_eq!(value[0]["run_status"], "failed");
    assert_eq!(value[0]["last_error"], "dns timeout");
}
