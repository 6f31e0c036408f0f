//! Overview specs
//!
//! Verify `cpo show` text and JSON output.

use crate::prelude::*;

#[test]
fn show_running_campaign() {
    Project::with_doc(RUNNING_DOC)
        .cpo()
        .args(&["show", "campaign.json"])
        .passes()
        .stdout_eq(
            "campaign c-1 (Step by step)\n\
             \n\
             PHASE        CONFIG   EXEC       STATUS     DURATION\n\
             discovery    valid    completed  completed  500ms\n\
             validation   valid    running    in_progress -\n\
             extraction   valid    idle       configured -\n\
             analysis     missing  idle       -          -\n\
             \n\
             configured   3/4 (75%)\n\
             completed    1/4 (25%)\n\
             running      validation\n\
             guidance     1 queued, latest [validation] Set DNS resolvers\n\
             start        blocked: No configured phase ready to start\n\
             next         watch validation\n",
        );
}

#[test]
fn show_failed_campaign_lists_retry() {
    Project::with_doc(FAILED_DOC)
        .cpo()
        .args(&["show", "campaign.json"])
        .passes()
        .stdout_has("failed       discovery\n")
        .stdout_has("last failed  discovery\n")
        .stdout_has("retry        discovery\n")
        .stdout_has("start        ready (Start validation)\n")
        .stdout_has("next         start validation\n");
}

#[test]
fn show_automatic_mode_lists_missing_configuration() {
    Project::with_doc(AUTO_DOC)
        .cpo()
        .args(&["show", "campaign.json"])
        .passes()
        .stdout_has("campaign c-1 (Full sequence)\n")
        .stdout_has("start        blocked: Missing configuration: validation, extraction, analysis\n");
}

#[test]
fn show_json() {
    let run = Project::with_doc(RUNNING_DOC)
        .cpo()
        .args(&["show", "campaign.json", "--format", "json"])
        .passes();
    let value = run.json();

    assert_eq!(value["campaign_id"], "c-1");
    assert_eq!(value["phases_enriched"][0]["duration_ms"], 500);
    assert_eq!(value["phase_progress"]["discovery"], 100);
    assert_eq!(value["phase_progress"]["validation"], 40);
    assert_eq!(value["config_progress"]["percent"], 75);
    assert_eq!(value["overall_progress"]["completed"], 1);
    assert_eq!(value["exec_summary"]["running"], 1);
    assert_eq!(value["active_phase"], "validation");
    assert_eq!(value["mode"]["auto_advance"], false);
    assert_eq!(value["guidance"]["count"], 1);
    assert_eq!(value["next_action"]["action"], "watch");
    assert_eq!(value["start_cta"]["label"], "Nothing to start");
    assert_eq!(value["rejected_events"], 0);
}

#[test]
fn flat_cache_matches_keyed_lookup() {
    let project = Project::with_doc(RUNNING_DOC);
    let keyed = project.cpo().args(&["show", "campaign.json"]).passes();
    project
        .cpo()
        .args(&["show", "campaign.json", "--flat"])
        .passes()
        .stdout_eq(&keyed.stdout);
}

#[test]
fn rejected_events_are_counted() {
    Project::with_doc(
        r#"{
          "campaign_id": "c-1",
          "statuses": { "discovery": { "status": "running" } },
          "events": [
            { "type": "phase_started", "campaign_id": "c-1", "phase": "discovery", "ts": 10 },
            { "type": "phase_started", "campaign_id": "c-1", "phase": "discovery", "ts": 20 }
          ]
        }"#,
    )
    .cpo()
    .args(&["show", "campaign.json"])
    .passes()
    .stdout_has("rejected     1 event(s)\n")
    .stderr_has("execution event rejected");
}

#[test]
fn matching_campaign_flag_is_accepted() {
    Project::with_doc(MANUAL_DOC)
        .cpo()
        .args(&["show", "campaign.json", "--campaign", "c-1"])
        .passes()
        .stdout_has("next         start discovery\n");
}
