//! Replay specs
//!
//! `cpo replay` feeds the document's events through a fresh store and prints
//! one line per bus notification.

use crate::prelude::*;

#[test]
fn replay_running_campaign() {
    Project::with_doc(RUNNING_DOC)
        .cpo()
        .args(&["replay", "campaign.json"])
        .passes()
        .stdout_eq(
            "replaying 3 event(s) for c-1\n  \
             1. phase:started    discovery   ts=1000 -> running\n  \
             2. phase:completed  discovery   ts=1500 -> completed in 500ms\n  \
             3. phase:started    validation  ts=2000 -> running\n\
             next: watch validation\n",
        );
}

#[test]
fn replay_failed_run_shows_error() {
    Project::with_doc(FAILED_DOC)
        .cpo()
        .args(&["replay", "campaign.json"])
        .passes()
        .stdout_has("  2. phase:failed     discovery   ts=350 -> failed in 250ms: dns timeout\n")
        .stdout_has("next: start validation\n");
}

#[test]
fn replay_reports_rejected_events_and_continues() {
    Project::with_doc(
        r#"{
          "campaign_id": "c-1",
          "statuses": { "discovery": { "status": "completed" } },
          "events": [
            { "type": "phase_started", "campaign_id": "c-1", "phase": "discovery", "ts": 1000 },
            { "type": "phase_started", "campaign_id": "c-1", "phase": "discovery", "ts": 1200 },
            { "type": "phase_completed", "campaign_id": "c-1", "phase": "discovery", "ts": 3000 }
          ]
        }"#,
    )
    .cpo()
    .args(&["replay", "campaign.json"])
    .passes()
    .stdout_has(
        "  2. rejected: phase discovery of campaign c-1 is already running (started at 1000)\n",
    )
    .stdout_has("  3. phase:completed  discovery   ts=3000 -> completed in 2.0s\n");
}

#[test]
fn replay_skips_other_campaigns() {
    Project::with_doc(
        r#"{
          "campaign_id": "c-1",
          "events": [
            { "type": "phase_started", "campaign_id": "c-2", "phase": "discovery", "ts": 1 },
            { "type": "phase_started", "campaign_id": "c-1", "phase": "analysis", "ts": 2 }
          ]
        }"#,
    )
    .cpo()
    .args(&["replay", "campaign.json"])
    .passes()
    .stdout_has("replaying 1 event(s) for c-1\n")
    .stdout_has("  1. phase:started    analysis    ts=2 -> running\n")
    .stdout_lacks("c-2");
}
