// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution runtime entries
//!
//! Per-phase start/finish timestamps derived from the execution event log.
//! Timestamps are epoch milliseconds.

use crate::campaign::CampaignId;
use crate::phase::PhaseKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status of the latest run recorded for a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Running,
    Completed,
    Failed,
}

impl RunStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Failed)
    }
}

/// Execution events written by the phase runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExecutionEvent {
    PhaseStarted {
        campaign_id: CampaignId,
        phase: PhaseKey,
        ts: i64,
    },
    PhaseCompleted {
        campaign_id: CampaignId,
        phase: PhaseKey,
        ts: i64,
    },
    PhaseFailed {
        campaign_id: CampaignId,
        phase: PhaseKey,
        ts: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

impl ExecutionEvent {
    pub fn campaign_id(&self) -> &CampaignId {
        match self {
            ExecutionEvent::PhaseStarted { campaign_id, .. }
            | ExecutionEvent::PhaseCompleted { campaign_id, .. }
            | ExecutionEvent::PhaseFailed { campaign_id, .. } => campaign_id,
        }
    }

    pub fn phase(&self) -> PhaseKey {
        match self {
            ExecutionEvent::PhaseStarted { phase, .. }
            | ExecutionEvent::PhaseCompleted { phase, .. }
            | ExecutionEvent::PhaseFailed { phase, .. } => *phase,
        }
    }

    pub fn ts(&self) -> i64 {
        match self {
            ExecutionEvent::PhaseStarted { ts, .. }
            | ExecutionEvent::PhaseCompleted { ts, .. }
            | ExecutionEvent::PhaseFailed { ts, .. } => *ts,
        }
    }

    /// Event name for logging and bus routing
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionEvent::PhaseStarted { .. } => "phase:started",
            ExecutionEvent::PhaseCompleted { .. } => "phase:completed",
            ExecutionEvent::PhaseFailed { .. } => "phase:failed",
        }
    }
}

/// Timestamps for the latest run of one phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecRuntimeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RunStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecRuntimeEntry {
    /// `completed_at - started_at` when both are known and the difference fits
    pub fn duration_ms(&self) -> Option<i64> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => end.checked_sub(start),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == Some(RunStatus::Running)
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_some_and(|s| s.is_finished())
    }
}

/// All runtime entries recorded for one campaign
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRuntime {
    entries: BTreeMap<PhaseKey, ExecRuntimeEntry>,
}

impl CampaignRuntime {
    pub fn get(&self, phase: PhaseKey) -> Option<&ExecRuntimeEntry> {
        self.entries.get(&phase)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PhaseKey, &ExecRuntimeEntry)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Entry for a phase, created on first write
    pub fn entry_mut(&mut self, phase: PhaseKey) -> &mut ExecRuntimeEntry {
        self.entries.entry(phase).or_default()
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
