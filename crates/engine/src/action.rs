// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Next-action resolution
//!
//! Reduces the phase set and advance mode to the single action the operator
//! should take next.

use crate::gating::{
    active_execution_phase, first_missing, missing_before, next_runnable_phase,
};
use cpo_core::{AdvanceMode, PhaseKey, UiPipelinePhase};
use serde::{Serialize, Serializer};
use std::fmt;

/// Why a configure action was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureReason {
    /// A phase before the runnable one has no configuration
    EarlierPhase,
    Required,
}

impl ConfigureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigureReason::EarlierPhase => "Configure earlier phase",
            ConfigureReason::Required => "Configuration required",
        }
    }
}

impl fmt::Display for ConfigureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ConfigureReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The one recommended operator action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NextAction {
    Configure {
        phase: PhaseKey,
        reason: ConfigureReason,
    },
    Start {
        phase: PhaseKey,
    },
    Watch {
        phase: PhaseKey,
    },
    Wait {
        phase: PhaseKey,
    },
}

impl NextAction {
    pub fn phase(&self) -> PhaseKey {
        match self {
            NextAction::Configure { phase, .. }
            | NextAction::Start { phase }
            | NextAction::Watch { phase }
            | NextAction::Wait { phase } => *phase,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            NextAction::Configure { .. } => "configure",
            NextAction::Start { .. } => "start",
            NextAction::Watch { .. } => "watch",
            NextAction::Wait { .. } => "wait",
        }
    }
}

impl fmt::Display for NextAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextAction::Configure { phase, reason } => write!(f, "configure {} ({})", phase, reason),
            other => write!(f, "{} {}", other.kind(), other.phase()),
        }
    }
}

/// Last phase of the list, or of the fixed order when the list is empty
fn fallback_phase(phases: &[UiPipelinePhase]) -> PhaseKey {
    phases.last().map(|p| p.key).unwrap_or_else(PhaseKey::last)
}

fn configure(phase: PhaseKey, reason: ConfigureReason) -> NextAction {
    NextAction::Configure { phase, reason }
}

/// Resolve the next operator action
pub fn resolve_next_action(phases: &[UiPipelinePhase], mode: AdvanceMode) -> NextAction {
    match mode {
        AdvanceMode::Manual => resolve_manual(phases),
        AdvanceMode::Automatic => resolve_automatic(phases),
    }
}

fn resolve_manual(phases: &[UiPipelinePhase]) -> NextAction {
    if let Some(phase) = active_execution_phase(phases) {
        return NextAction::Watch { phase };
    }
    if let Some(runnable) = next_runnable_phase(phases) {
        return match missing_before(phases, runnable) {
            Some(missing) => configure(missing, ConfigureReason::EarlierPhase),
            None => NextAction::Start { phase: runnable },
        };
    }
    if let Some(missing) = first_missing(phases) {
        return configure(missing, ConfigureReason::Required);
    }
    NextAction::Wait {
        phase: fallback_phase(phases),
    }
}

fn resolve_automatic(phases: &[UiPipelinePhase]) -> NextAction {
    if let Some(missing) = first_missing(phases) {
        return configure(missing, ConfigureReason::Required);
    }
    if let Some(phase) = active_execution_phase(phases) {
        return NextAction::Watch { phase };
    }
    match next_runnable_phase(phases) {
        Some(phase) => NextAction::Start { phase },
        None => NextAction::Wait {
            phase: fallback_phase(phases),
        },
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
