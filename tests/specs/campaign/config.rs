//! Engine config specs

use crate::prelude::*;

const LABELS: &str = r#"
[labels]
full_sequence = "All at once"
step_by_step = "One at a time"
"#;

#[test]
fn explicit_config_file_sets_labels() {
    let project = Project::with_doc(AUTO_DOC);
    project.file("engine.toml", LABELS);
    project
        .cpo()
        .args(&["show", "campaign.json", "--config", "engine.toml"])
        .passes()
        .stdout_has("campaign c-1 (All at once)\n");
}

#[test]
fn user_config_file_is_picked_up() {
    let project = Project::with_doc(MANUAL_DOC);
    project.file("config/cpo/config.toml", LABELS);
    project
        .cpo()
        .args(&["show", "campaign.json"])
        .passes()
        .stdout_has("campaign c-1 (One at a time)\n");
}

#[test]
fn missing_user_config_uses_defaults() {
    Project::with_doc(MANUAL_DOC)
        .cpo()
        .args(&["show", "campaign.json"])
        .passes()
        .stdout_has("campaign c-1 (Step by step)\n");
}

#[test]
fn custom_status_endpoint_still_reads_flat_cache() {
    let project = Project::with_doc(RUNNING_DOC);
    project.file("engine.toml", "status_endpoint = \"campaign_phase_status\"\n");
    project
        .cpo()
        .args(&["show", "campaign.json", "--flat", "--config", "engine.toml"])
        .passes()
        .stdout_has("running      validation\n");
}

#[test]
fn invalid_config_is_reported() {
    let project = Project::with_doc(MANUAL_DOC);
    project.file("engine.toml", "status_endpoint = [\n");
    project
        .cpo()
        .args(&["next", "campaign.json", "--config", "engine.toml"])
        .fails()
        .stderr_has("error: Cannot load config 'engine.toml'")
        .stderr_has("Known keys: status_endpoint");
}

#[test]
fn explicit_config_must_exist() {
    Project::with_doc(MANUAL_DOC)
        .cpo()
        .args(&["next", "campaign.json", "--config", "absent.toml"])
        .fails()
        .stderr_has("Cannot load config 'absent.toml'");
}
