// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution event log
//!
//! Materializes per-phase runtime entries from `phase_started`,
//! `phase_completed` and `phase_failed` events. Each campaign's runtime is
//! held behind an `Arc` and updated copy-on-write, so a reader holding the
//! previous value can tell by pointer whether anything changed.

use cpo_core::{
    CampaignId, CampaignRuntime, ExecutionEvent, PhaseKey, RunStatus, RuntimeSource,
};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Error applying an execution event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("phase {phase} of campaign {campaign} is already running (started at {started_at})")]
    AlreadyRunning {
        campaign: CampaignId,
        phase: PhaseKey,
        started_at: i64,
    },
    #[error("phase {phase} of campaign {campaign} already finished")]
    AlreadyFinished { campaign: CampaignId, phase: PhaseKey },
    #[error("phase {phase} of campaign {campaign} finished at {finished_at}, before its start at {started_at}")]
    FinishedBeforeStart {
        campaign: CampaignId,
        phase: PhaseKey,
        started_at: i64,
        finished_at: i64,
    },
}

/// Per-campaign runtime built from execution events
#[derive(Debug)]
pub struct ExecutionLog {
    by_campaign: HashMap<CampaignId, Arc<CampaignRuntime>>,
    /// Returned for every campaign without entries
    empty: Arc<CampaignRuntime>,
}

impl Default for ExecutionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionLog {
    pub fn new() -> Self {
        Self {
            by_campaign: HashMap::new(),
            empty: Arc::new(CampaignRuntime::default()),
        }
    }

    /// Apply one event.
    ///
    /// - a start on a phase with no run, or a finished run, begins a new run
    /// - a start on a running phase is rejected (earliest start wins)
    /// - a finish on a finished run is rejected (first finish wins)
    /// - a finish earlier than the recorded start is rejected
    /// - a finish without a start is recorded with no start time
    pub fn apply(&mut self, event: &ExecutionEvent) -> Result<(), ApplyError> {
        let campaign = event.campaign_id();
        let phase = event.phase();
        let ts = event.ts();

        // Validate against the current entry before touching the Arc
        let current = self
            .by_campaign
            .get(campaign)
            .and_then(|rt| rt.get(phase))
            .cloned()
            .unwrap_or_default();

        match event {
            ExecutionEvent::PhaseStarted { .. } => {
                if let (true, Some(started_at)) = (current.is_running(), current.started_at) {
                    return Err(ApplyError::AlreadyRunning {
                        campaign: campaign.clone(),
                        phase,
                        started_at,
                    });
                }
            }
            ExecutionEvent::PhaseCompleted { .. } | ExecutionEvent::PhaseFailed { .. } => {
                if current.is_finished() {
                    return Err(ApplyError::AlreadyFinished {
                        campaign: campaign.clone(),
                        phase,
                    });
                }
                if let Some(started_at) = current.started_at.filter(|start| ts < *start) {
                    return Err(ApplyError::FinishedBeforeStart {
                        campaign: campaign.clone(),
                        phase,
                        started_at,
                        finished_at: ts,
                    });
                }
            }
        }

        let runtime = self.by_campaign.entry(campaign.clone()).or_default();
        let entry = Arc::make_mut(runtime).entry_mut(phase);
        match event {
            ExecutionEvent::PhaseStarted { .. } => {
                entry.started_at = Some(ts);
                entry.completed_at = None;
                entry.error = None;
                entry.status = Some(RunStatus::Running);
            }
            ExecutionEvent::PhaseCompleted { .. } => {
                if entry.started_at.is_none() {
                    tracing::debug!(%campaign, %phase, "completion without recorded start");
                }
                entry.completed_at = Some(ts);
                entry.status = Some(RunStatus::Completed);
            }
            ExecutionEvent::PhaseFailed { error, .. } => {
                entry.completed_at = Some(ts);
                entry.error = error.clone();
                entry.status = Some(RunStatus::Failed);
            }
        }
        Ok(())
    }

    /// Apply a batch, logging and skipping rejected events.
    /// Returns the rejections in order.
    pub fn apply_all<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a ExecutionEvent>,
    ) -> Vec<ApplyError> {
        let mut rejected = Vec::new();
        for event in events {
            if let Err(e) = self.apply(event) {
                tracing::warn!(event = event.name(), error = %e, "execution event rejected");
                rejected.push(e);
            }
        }
        rejected
    }

    /// Drop all runtime for a campaign
    pub fn clear(&mut self, campaign: &CampaignId) {
        self.by_campaign.remove(campaign);
    }

    pub fn campaign_count(&self) -> usize {
        self.by_campaign.len()
    }
}

impl RuntimeSource for ExecutionLog {
    fn runtime(&self, campaign: &CampaignId) -> Arc<CampaignRuntime> {
        self.by_campaign
            .get(campaign)
            .map(Arc::clone)
            .unwrap_or_else(|| Arc::clone(&self.empty))
    }
}

#[cfg(test)]
#[path = "exec_log_tests.rs"]
mod tests;
