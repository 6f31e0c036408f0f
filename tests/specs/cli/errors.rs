//! Error reporting specs
//!
//! Failures print a message, context and suggestions on stderr and exit
//! non-zero.

use crate::prelude::*;

#[test]
fn missing_document() {
    Project::empty()
        .cpo()
        .args(&["show", "nope.json"])
        .fails()
        .stderr_has("error: Cannot load campaign document 'nope.json'")
        .stderr_has("Check that the file exists and is readable");
}

#[test]
fn unknown_phase_key_in_document() {
    Project::with_doc(
        r#"{ "campaign_id": "c-1", "statuses": { "enrichment": { "status": "configured" } } }"#,
    )
    .cpo()
    .args(&["next", "campaign.json"])
    .fails()
    .stderr_has("Phase keys must be discovery, validation, extraction or analysis");
}

#[test]
fn campaign_mismatch() {
    Project::with_doc(MANUAL_DOC)
        .cpo()
        .args(&["show", "campaign.json", "--campaign", "c-9"])
        .fails()
        .stderr_has("Campaign 'c-9' not found in 'campaign.json'")
        .stderr_has("Use --campaign c-1");
}

#[test]
fn record_rejects_unknown_phase_argument() {
    Project::with_doc(MANUAL_DOC)
        .cpo()
        .args(&["record", "campaign.json", "enrichment", "start"])
        .fails()
        .stderr_has("unknown phase: enrichment");
}

#[test]
fn failure_leaves_stdout_empty() {
    Project::empty()
        .cpo()
        .args(&["phases", "nope.json"])
        .fails()
        .stdout_eq("");
}
