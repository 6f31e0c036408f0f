//! Next action specs
//!
//! Verify the recommended action in both advance modes.

use crate::prelude::*;

#[test]
fn manual_mode_starts_first_configured_phase() {
    Project::with_doc(MANUAL_DOC)
        .cpo()
        .args(&["next", "campaign.json"])
        .passes()
        .stdout_eq("start discovery\n");
}

#[test]
fn automatic_mode_requires_all_configuration() {
    Project::with_doc(AUTO_DOC)
        .cpo()
        .args(&["next", "campaign.json"])
        .passes()
        .stdout_eq("configure validation (Configuration required)\n");
}

#[test]
fn running_phase_is_watched() {
    Project::with_doc(RUNNING_DOC)
        .cpo()
        .args(&["next", "campaign.json"])
        .passes()
        .stdout_eq("watch validation\n");
}

#[test]
fn failed_predecessor_does_not_block() {
    Project::with_doc(FAILED_DOC)
        .cpo()
        .args(&["next", "campaign.json"])
        .passes()
        .stdout_eq("start validation\n");
}

#[test]
fn nothing_configured_asks_for_configuration() {
    Project::with_doc(r#"{ "campaign_id": "c-1" }"#)
        .cpo()
        .args(&["next", "campaign.json"])
        .passes()
        .stdout_eq("configure discovery (Configuration required)\n");
}

#[test]
fn everything_finished_waits_on_last_phase() {
    Project::with_doc(
        r#"{
          "campaign_id": "c-1",
          "statuses": {
            "discovery": { "status": "completed" },
            "validation": { "status": "completed" },
            "extraction": { "status": "failed" },
            "analysis": { "status": "completed" }
          }
        }"#,
    )
    .cpo()
    .args(&["next", "campaign.json"])
    .passes()
    .stdout_eq("wait analysis\n");
}

#[test]
fn json_output() {
    let run = Project::with_doc(MANUAL_DOC)
        .cpo()
        .args(&["next", "campaign.json", "--format", "json"])
        .passes();
    let value = run.json();
    assert_eq!(value["action"], "start");
    assert_eq!(value["phase"], "discovery");
}
