//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    Project::empty()
        .cpo()
        .args(&["--help"])
        .passes()
        .stdout_has("show")
        .stdout_has("next")
        .stdout_has("phases")
        .stdout_has("replay")
        .stdout_has("record");
}

#[test]
fn version_flag() {
    Project::empty()
        .cpo()
        .args(&["--version"])
        .passes()
        .stdout_has("cpo 0.1.0");
}

#[test]
fn missing_subcommand_fails() {
    Project::empty().cpo().fails().stderr_has("Usage");
}
