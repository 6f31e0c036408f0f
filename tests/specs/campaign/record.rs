//! Record specs
//!
//! `cpo record` validates an execution event against the runs already in the
//! document, then appends it and saves.

use crate::prelude::*;

#[test]
fn record_start_then_complete() {
    let project = Project::with_doc(MANUAL_DOC);

    project
        .cpo()
        .args(&["record", "campaign.json", "discovery", "start", "--ts", "5000"])
        .passes()
        .stdout_eq("Recorded phase:started for discovery at 5000\n");

    project
        .cpo()
        .args(&["record", "campaign.json", "discovery", "complete", "--ts", "6500"])
        .passes()
        .stdout_eq("Recorded phase:completed for discovery at 6500\n");

    project
        .cpo()
        .args(&["phases", "campaign.json"])
        .passes()
        .stdout_has("1.5s\n");
    assert!(project.read("campaign.json").contains("phase_completed"));
}

#[test]
fn finish_before_start_is_rejected_and_not_saved() {
    let project = Project::with_doc(MANUAL_DOC);
    project
        .cpo()
        .args(&["record", "campaign.json", "discovery", "start", "--ts", "5000"])
        .passes();
    let before = project.read("campaign.json");

    project
        .cpo()
        .args(&["record", "campaign.json", "discovery", "complete", "--ts", "4000"])
        .fails()
        .stderr_has("error: Execution event rejected")
        .stderr_has("finished at 4000, before its start at 5000")
        .stderr_has("cpo phases campaign.json");

    assert_eq!(project.read("campaign.json"), before);
}

#[test]
fn failure_carries_error_message() {
    let project = Project::with_doc(MANUAL_DOC);
    project
        .cpo()
        .args(&["record", "campaign.json", "validation", "start", "--ts", "10"])
        .passes();
    project
        .cpo()
        .args(&[
            "record",
            "campaign.json",
            "validation",
            "fail",
            "--ts",
            "40",
            "--error",
            "resolver down",
        ])
        .passes()
        .stdout_eq("Recorded phase:failed for validation at 40\n");

    let run = project
        .cpo()
        .args(&["replay", "campaign.json"])
        .passes();
    assert!(run.stdout.contains("failed in 30ms: resolver down"));
}

#[test]
fn missing_timestamp_uses_current_time() {
    let project = Project::with_doc(MANUAL_DOC);
    let run = project
        .cpo()
        .args(&["record", "campaign.json", "analysis", "start"])
        .passes();
    let ts: i64 = run
        .stdout
        .trim()
        .rsplit(' ')
        .next()
        .unwrap()
        .parse()
        .unwrap();
    // Some time after 2020-01-01
    assert!(ts > 1_577_836_800_000);
}
