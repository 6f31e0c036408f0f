// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Start gating
//!
//! Which phases are missing configuration, which phase may run next, and what
//! blocks a start. Functions take the phase slice as projected so a caller's
//! own phase list is honored as given.

use cpo_core::{AdvanceMode, ConfigState, ExecState, PhaseKey, UiPipelinePhase};
use serde::{Serialize, Serializer};
use std::fmt;

/// Why a start action is not (or not only) possible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReason {
    /// Automatic mode: these phases have no configuration
    MissingConfiguration(Vec<PhaseKey>),
    /// Manual mode: nothing satisfies the runnable predicate
    NothingReady,
    /// Manual mode: a phase before the runnable one lacks configuration
    ConfigureEarlier(PhaseKey),
    /// Manual mode, informational
    FirstPhaseRunning,
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockReason::MissingConfiguration(phases) => {
                write!(f, "Missing configuration: ")?;
                for (i, phase) in phases.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", phase)?;
                }
                Ok(())
            }
            BlockReason::NothingReady => write!(f, "No configured phase ready to start"),
            BlockReason::ConfigureEarlier(phase) => {
                write!(f, "Configure earlier phase: {}", phase)
            }
            BlockReason::FirstPhaseRunning => write!(f, "First phase already running"),
        }
    }
}

impl Serialize for BlockReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Phases without configuration, in order
pub fn missing_phases(phases: &[UiPipelinePhase]) -> Vec<PhaseKey> {
    phases
        .iter()
        .filter(|p| p.config_state == ConfigState::Missing)
        .map(|p| p.key)
        .collect()
}

pub fn first_missing(phases: &[UiPipelinePhase]) -> Option<PhaseKey> {
    phases
        .iter()
        .find(|p| p.config_state == ConfigState::Missing)
        .map(|p| p.key)
}

/// First phase currently running
pub fn active_execution_phase(phases: &[UiPipelinePhase]) -> Option<PhaseKey> {
    phases
        .iter()
        .find(|p| p.exec_state == ExecState::Running)
        .map(|p| p.key)
}

/// Runnable predicate for the phase at `position`.
///
/// The phase is configured and idle, and every phase before it is configured
/// and either completed or failed. A failed predecessor does not block.
pub fn is_runnable(phases: &[UiPipelinePhase], position: usize) -> bool {
    let Some(phase) = phases.get(position) else {
        return false;
    };
    phase.is_configured()
        && phase.exec_state == ExecState::Idle
        && phases[..position]
            .iter()
            .all(|p| p.is_configured() && p.exec_state.is_resolved())
}

pub fn next_runnable_phase(phases: &[UiPipelinePhase]) -> Option<PhaseKey> {
    (0..phases.len())
        .find(|&i| is_runnable(phases, i))
        .map(|i| phases[i].key)
}

/// Phases that are configured and have not run yet
pub fn remaining_runnable_count(phases: &[UiPipelinePhase]) -> usize {
    phases
        .iter()
        .filter(|p| p.is_configured() && p.exec_state == ExecState::Idle)
        .count()
}

fn position_of(phases: &[UiPipelinePhase], key: PhaseKey) -> Option<usize> {
    phases.iter().position(|p| p.key == key)
}

/// The earliest missing phase, when it sits before `runnable`.
///
/// Unreachable while runnability requires configured predecessors; kept for
/// the "Configure earlier phase" rule.
pub(crate) fn missing_before(phases: &[UiPipelinePhase], runnable: PhaseKey) -> Option<PhaseKey> {
    let missing = first_missing(phases)?;
    let missing_at = position_of(phases, missing)?;
    let runnable_at = position_of(phases, runnable)?;
    (missing_at < runnable_at).then_some(missing)
}

/// Everything preventing a start in the given mode
pub fn start_blocking_reasons(phases: &[UiPipelinePhase], mode: AdvanceMode) -> Vec<BlockReason> {
    let mut reasons = Vec::new();
    match mode {
        AdvanceMode::Automatic => {
            let missing = missing_phases(phases);
            if !missing.is_empty() {
                reasons.push(BlockReason::MissingConfiguration(missing));
            }
        }
        AdvanceMode::Manual => match next_runnable_phase(phases) {
            None => reasons.push(BlockReason::NothingReady),
            Some(runnable) => {
                if let Some(missing) = missing_before(phases, runnable) {
                    reasons.push(BlockReason::ConfigureEarlier(missing));
                }
            }
        },
    }
    if mode == AdvanceMode::Manual
        && phases
            .first()
            .is_some_and(|p| p.exec_state == ExecState::Running)
    {
        reasons.push(BlockReason::FirstPhaseRunning);
    }
    reasons
}

pub fn can_start(phases: &[UiPipelinePhase], mode: AdvanceMode) -> bool {
    start_blocking_reasons(phases, mode).is_empty()
}

#[cfg(test)]
#[path = "gating_tests.rs"]
mod tests;
