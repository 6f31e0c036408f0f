// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration enrichment of projected phases

use crate::projector::Phases;
use cpo_core::{CampaignRuntime, PhaseKey, RunStatus, UiPipelinePhase, PHASE_COUNT};
use serde::Serialize;

/// A projected phase together with its latest run timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedPhase {
    #[serde(flatten)]
    pub phase: UiPipelinePhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_status: Option<RunStatus>,
    pub duration_ms: Option<i64>,
}

impl EnrichedPhase {
    pub fn key(&self) -> PhaseKey {
        self.phase.key
    }
}

pub type EnrichedPhases = [EnrichedPhase; PHASE_COUNT];

/// Attach runtime data to one phase; phases without runtime get `None`s
pub fn enrich_phase(phase: &UiPipelinePhase, runtime: &CampaignRuntime) -> EnrichedPhase {
    let entry = runtime.get(phase.key);
    EnrichedPhase {
        phase: phase.clone(),
        started_at: entry.and_then(|e| e.started_at),
        completed_at: entry.and_then(|e| e.completed_at),
        run_status: entry.and_then(|e| e.status),
        duration_ms: entry.and_then(|e| e.duration_ms()),
    }
}

pub fn enrich(phases: &Phases, runtime: &CampaignRuntime) -> EnrichedPhases {
    std::array::from_fn(|i| enrich_phase(&phases[i], runtime))
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
