// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress, failure and start summaries derived from the phase set

use crate::config::ModeLabels;
use crate::gating::{missing_phases, next_runnable_phase, start_blocking_reasons, BlockReason};
use cpo_core::{AdvanceMode, ConfigState, ExecState, PhaseKey, UiPipelinePhase, PHASE_COUNT};
use serde::Serialize;
use std::collections::BTreeMap;

/// `round(100 * n / total)`, zero for an empty total
pub fn percent(n: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let n = n.min(total);
    ((n * 100 + total / 2) / total) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigProgress {
    pub configured: usize,
    pub total: usize,
    pub percent: u8,
}

impl ConfigProgress {
    pub fn from_phases(phases: &[UiPipelinePhase]) -> Self {
        let configured = phases
            .iter()
            .filter(|p| p.config_state == ConfigState::Valid)
            .count();
        Self {
            configured,
            total: phases.len(),
            percent: percent(configured, phases.len()),
        }
    }
}

/// Histogram of execution states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExecSummary {
    pub idle: usize,
    pub running: usize,
    pub completed: usize,
    pub failed: usize,
}

impl ExecSummary {
    pub fn from_phases(phases: &[UiPipelinePhase]) -> Self {
        let mut summary = Self::default();
        for phase in phases {
            match phase.exec_state {
                ExecState::Idle => summary.idle += 1,
                ExecState::Running => summary.running += 1,
                ExecState::Completed => summary.completed += 1,
                ExecState::Failed => summary.failed += 1,
            }
        }
        summary
    }

    pub fn count(&self, state: ExecState) -> usize {
        match state {
            ExecState::Idle => self.idle,
            ExecState::Running => self.running,
            ExecState::Completed => self.completed,
            ExecState::Failed => self.failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

impl OverallProgress {
    pub fn from_phases(phases: &[UiPipelinePhase]) -> Self {
        let completed = phases
            .iter()
            .filter(|p| p.exec_state == ExecState::Completed)
            .count();
        Self {
            completed,
            total: phases.len(),
            percent: percent(completed, phases.len()),
        }
    }
}

/// Per-phase completion percentage
pub type PhaseProgressMap = BTreeMap<PhaseKey, u8>;

/// Completed phases are 100, running and failed phases show what the feed
/// reported, idle phases are 0.
pub fn phase_progress(
    phases: &[UiPipelinePhase],
    reported: &[Option<u8>; PHASE_COUNT],
) -> PhaseProgressMap {
    phases
        .iter()
        .map(|p| {
            let pct = match p.exec_state {
                ExecState::Completed => 100,
                ExecState::Running | ExecState::Failed => {
                    reported[p.key.index()].unwrap_or(0).min(100)
                }
                ExecState::Idle => 0,
            };
            (p.key, pct)
        })
        .collect()
}

pub fn failed_phases(phases: &[UiPipelinePhase]) -> Vec<PhaseKey> {
    phases
        .iter()
        .filter(|p| p.exec_state == ExecState::Failed)
        .map(|p| p.key)
        .collect()
}

/// Failed phases that still have a configuration to rerun with
pub fn retry_eligible_phases(phases: &[UiPipelinePhase]) -> Vec<PhaseKey> {
    phases
        .iter()
        .filter(|p| p.exec_state == ExecState::Failed && p.is_configured())
        .map(|p| p.key)
        .collect()
}

/// The recorded last failure, else the latest phase currently failed
pub fn last_failed_phase(
    phases: &[UiPipelinePhase],
    recorded: Option<PhaseKey>,
) -> Option<PhaseKey> {
    recorded.or_else(|| {
        phases
            .iter()
            .rev()
            .find(|p| p.exec_state == ExecState::Failed)
            .map(|p| p.key)
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureInfo {
    pub last_failed_phase: Option<PhaseKey>,
    pub failed_phases: Vec<PhaseKey>,
}

impl FailureInfo {
    pub fn new(phases: &[UiPipelinePhase], recorded: Option<PhaseKey>) -> Self {
        Self {
            last_failed_phase: last_failed_phase(phases, recorded),
            failed_phases: failed_phases(phases),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeDescriptor {
    pub auto_advance: bool,
    pub label: String,
}

impl ModeDescriptor {
    pub fn new(auto_advance: bool, labels: &ModeLabels) -> Self {
        Self {
            auto_advance,
            label: labels.for_mode(auto_advance).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartEligibility {
    pub can_start: bool,
    pub reasons: Vec<BlockReason>,
}

impl StartEligibility {
    pub fn new(phases: &[UiPipelinePhase], mode: AdvanceMode) -> Self {
        let reasons = start_blocking_reasons(phases, mode);
        Self {
            can_start: reasons.is_empty(),
            reasons,
        }
    }
}

/// State of the pre-start checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreflightStatus {
    pub open: bool,
    pub ready: bool,
    pub missing: Vec<PhaseKey>,
    pub reasons: Vec<BlockReason>,
}

impl PreflightStatus {
    pub fn new(phases: &[UiPipelinePhase], eligibility: &StartEligibility, open: bool) -> Self {
        Self {
            open,
            ready: eligibility.can_start,
            missing: missing_phases(phases),
            reasons: eligibility.reasons.clone(),
        }
    }
}

/// The primary start button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartCta {
    pub enabled: bool,
    pub phase: Option<PhaseKey>,
    pub label: String,
    pub reasons: Vec<BlockReason>,
}

impl StartCta {
    pub fn new(phases: &[UiPipelinePhase], eligibility: &StartEligibility, mode: AdvanceMode) -> Self {
        let (phase, label) = match mode {
            AdvanceMode::Automatic => (
                phases.first().map(|p| p.key),
                "Start full sequence".to_string(),
            ),
            AdvanceMode::Manual => match next_runnable_phase(phases) {
                Some(phase) => (Some(phase), format!("Start {}", phase)),
                None => (None, "Nothing to start".to_string()),
            },
        };
        Self {
            enabled: eligibility.can_start,
            phase,
            label,
            reasons: eligibility.reasons.clone(),
        }
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
