// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::phases;
use cpo_core::PhaseKey::{Analysis, Discovery, Extraction, Validation};
use yare::parameterized;

#[parameterized(
    none = { 0, 4, 0 },
    one = { 1, 4, 25 },
    two = { 2, 4, 50 },
    three = { 3, 4, 75 },
    all = { 4, 4, 100 },
    thirds_round_down = { 1, 3, 33 },
    thirds_round_up = { 2, 3, 67 },
    empty_total = { 0, 0, 0 },
)]
fn percent_rounds(n: usize, total: usize, expected: u8) {
    assert_eq!(percent(n, total), expected);
}

#[test]
fn config_progress_counts_valid() {
    let progress = ConfigProgress::from_phases(&phases(["configured", "", "running", ""]));
    assert_eq!(
        progress,
        ConfigProgress {
            configured: 2,
            total: 4,
            percent: 50
        }
    );
}

#[test]
fn exec_summary_is_a_histogram() {
    let summary = ExecSummary::from_phases(&phases(["completed", "failed", "paused", ""]));
    assert_eq!(summary.idle, 1);
    assert_eq!(summary.running, 1);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.failed, 1);
    let total: usize = ExecState::ALL.iter().map(|s| summary.count(*s)).sum();
    assert_eq!(total, 4);
}

#[test]
fn overall_progress_counts_completed_only() {
    let progress = OverallProgress::from_phases(&phases(["completed", "failed", "completed", ""]));
    assert_eq!(progress.completed, 2);
    assert_eq!(progress.percent, 50);
}

#[test]
fn phase_progress_by_state() {
    let set = phases(["completed", "running", "failed", "configured"]);
    let map = phase_progress(&set, &[Some(10), Some(42), None, Some(80)]);
    assert_eq!(map[&Discovery], 100);
    assert_eq!(map[&Validation], 42);
    assert_eq!(map[&Extraction], 0);
    assert_eq!(map[&Analysis], 0);
    assert_eq!(map.len(), 4);
}

#[test]
fn failure_continuation() {
    let set = phases(["failed", "configured", "", ""]);
    assert_eq!(failed_phases(&set), vec![Discovery]);
    assert_eq!(retry_eligible_phases(&set), vec![Discovery]);
    assert_eq!(crate::gating::next_runnable_phase(&set), Some(Validation));
}

#[test]
fn last_failed_prefers_recorded() {
    let set = phases(["failed", "completed", "failed", ""]);
    assert_eq!(last_failed_phase(&set, None), Some(Extraction));
    assert_eq!(last_failed_phase(&set, Some(Discovery)), Some(Discovery));
    assert_eq!(last_failed_phase(&phases(["", "", "", ""]), None), None);

    let info = FailureInfo::new(&set, None);
    assert_eq!(info.failed_phases, vec![Discovery, Extraction]);
    assert_eq!(info.last_failed_phase, Some(Extraction));
}

#[test]
fn mode_descriptor_uses_labels() {
    let labels = ModeLabels::default();
    assert_eq!(ModeDescriptor::new(true, &labels).label, "Full sequence");
    assert_eq!(ModeDescriptor::new(false, &labels).label, "Step by step");
    assert!(!ModeDescriptor::new(false, &labels).auto_advance);
}

#[test]
fn start_cta_manual() {
    let set = phases(["completed", "configured", "", ""]);
    let eligibility = StartEligibility::new(&set, AdvanceMode::Manual);
    let cta = StartCta::new(&set, &eligibility, AdvanceMode::Manual);
    assert!(cta.enabled);
    assert_eq!(cta.phase, Some(Validation));
    assert_eq!(cta.label, "Start validation");
}

#[test]
fn start_cta_manual_nothing_to_start() {
    let set = phases(["running", "", "", ""]);
    let eligibility = StartEligibility::new(&set, AdvanceMode::Manual);
    let cta = StartCta::new(&set, &eligibility, AdvanceMode::Manual);
    assert!(!cta.enabled);
    assert_eq!(cta.phase, None);
    assert_eq!(cta.label, "Nothing to start");
    assert_eq!(cta.reasons.len(), 2);
}

#[test]
fn start_cta_automatic() {
    let set = phases(["configured", "", "", ""]);
    let eligibility = StartEligibility::new(&set, AdvanceMode::Automatic);
    let cta = StartCta::new(&set, &eligibility, AdvanceMode::Automatic);
    assert!(!cta.enabled);
    assert_eq!(cta.phase, Some(Discovery));
    assert_eq!(cta.label, "Start full sequence");
}

#[test]
fn preflight_mirrors_eligibility() {
    let set = phases(["configured", "", "configured", ""]);
    let eligibility = StartEligibility::new(&set, AdvanceMode::Automatic);
    let preflight = PreflightStatus::new(&set, &eligibility, true);
    assert!(preflight.open);
    assert!(!preflight.ready);
    assert_eq!(preflight.missing, vec![Validation, Analysis]);
    assert_eq!(preflight.reasons, eligibility.reasons);
}
