// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Change notifications published by campaign stores

use crate::campaign::CampaignId;
use crate::phase::PhaseKey;
use crate::runtime::ExecutionEvent;
use serde::{Deserialize, Serialize};

/// Something observable changed for a campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    StatusUpdated {
        campaign_id: CampaignId,
        phase: PhaseKey,
    },
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
    },
    GuidancePushed {
        campaign_id: CampaignId,
        phase: PhaseKey,
    },
    GuidanceCleared {
        campaign_id: CampaignId,
    },
    ModeChanged {
        campaign_id: CampaignId,
        full_sequence_mode: bool,
    },
    UiUpdated {
        campaign_id: CampaignId,
    },
}

impl Event {
    /// Routing name, matched by [`crate::events::EventPattern`]
    pub fn name(&self) -> &'static str {
        match self {
            Event::StatusUpdated { .. } => "status:updated",
            Event::PhaseStarted { .. } => "phase:started",
            Event::PhaseCompleted { .. } => "phase:completed",
            Event::PhaseFailed { .. } => "phase:failed",
            Event::GuidancePushed { .. } => "guidance:pushed",
            Event::GuidanceCleared { .. } => "guidance:cleared",
            Event::ModeChanged { .. } => "mode:changed",
            Event::UiUpdated { .. } => "ui:updated",
        }
    }

    pub fn campaign_id(&self) -> &CampaignId {
        match self {
            Event::StatusUpdated { campaign_id, .. }
            | Event::PhaseStarted { campaign_id, .. }
            | Event::PhaseCompleted { campaign_id, .. }
            | Event::PhaseFailed { campaign_id, .. }
            | Event::GuidancePushed { campaign_id, .. }
            | Event::GuidanceCleared { campaign_id }
            | Event::ModeChanged { campaign_id, .. }
            | Event::UiUpdated { campaign_id } => campaign_id,
        }
    }
}

impl From<&ExecutionEvent> for Event {
    fn from(event: &ExecutionEvent) -> Self {
        match event {
            ExecutionEvent::PhaseStarted {
                campaign_id,
                phase,
                ts,
            } => Event::PhaseStarted {
                campaign_id: campaign_id.clone(),
                phase: *phase,
                ts: *ts,
            },
            ExecutionEvent::PhaseCompleted {
                campaign_id,
                phase,
                ts,
            } => Event::PhaseCompleted {
                campaign_id: campaign_id.clone(),
                phase: *phase,
                ts: *ts,
            },
            ExecutionEvent::PhaseFailed {
                campaign_id,
                phase,
                ts,
                ..
            } => Event::PhaseFailed {
                campaign_id: campaign_id.clone(),
                phase: *phase,
                ts: *ts,
            },
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
