// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Campaign store with change notification
//!
//! Bundles the status, execution and UI stores and publishes an [`Event`]
//! on the bus after every successful mutation.

use crate::exec_log::{ApplyError, ExecutionLog};
use crate::status::StatusStore;
use crate::ui_state::UiStateStore;
use cpo_core::{
    CampaignId, CampaignUiState, Clock, Event, EventBus, EventReceiver, ExecutionEvent,
    GuidanceMessage, PhaseKey, Sources, StatusRecord, Subscription,
};

/// All externally owned campaign state, in memory
#[derive(Debug, Default)]
pub struct CampaignStore {
    status: StatusStore,
    exec: ExecutionLog,
    ui: UiStateStore,
    bus: EventBus,
}

impl CampaignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an existing bus instead of owning a fresh one
    pub fn with_bus(bus: EventBus) -> Self {
        Self {
            bus,
            ..Self::default()
        }
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn subscribe(&self, subscription: Subscription) -> EventReceiver {
        self.bus.subscribe(subscription)
    }

    /// Borrow the stores as query sources
    pub fn sources(&self) -> Sources<'_> {
        Sources::new(&self.status, &self.exec, &self.ui)
    }

    pub fn status_store(&self) -> &StatusStore {
        &self.status
    }

    pub fn exec_log(&self) -> &ExecutionLog {
        &self.exec
    }

    pub fn ui_store(&self) -> &UiStateStore {
        &self.ui
    }

    pub fn set_status(&mut self, campaign: &CampaignId, phase: PhaseKey, record: StatusRecord) {
        self.status.set(campaign.clone(), phase, record);
        self.bus.publish(Event::StatusUpdated {
            campaign_id: campaign.clone(),
            phase,
        });
    }

    /// Apply an execution event; rejected events publish nothing
    pub fn record(&mut self, event: &ExecutionEvent) -> Result<(), ApplyError> {
        self.exec.apply(event)?;
        self.bus.publish(Event::from(event));
        Ok(())
    }

    pub fn start_phase(
        &mut self,
        campaign: &CampaignId,
        phase: PhaseKey,
        clock: &impl Clock,
    ) -> Result<(), ApplyError> {
        self.record(&ExecutionEvent::PhaseStarted {
            campaign_id: campaign.clone(),
            phase,
            ts: clock.now_ms(),
        })
    }

    pub fn complete_phase(
        &mut self,
        campaign: &CampaignId,
        phase: PhaseKey,
        clock: &impl Clock,
    ) -> Result<(), ApplyError> {
        self.record(&ExecutionEvent::PhaseCompleted {
            campaign_id: campaign.clone(),
            phase,
            ts: clock.now_ms(),
        })
    }

    pub fn fail_phase(
        &mut self,
        campaign: &CampaignId,
        phase: PhaseKey,
        error: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), ApplyError> {
        self.record(&ExecutionEvent::PhaseFailed {
            campaign_id: campaign.clone(),
            phase,
            ts: clock.now_ms(),
            error,
        })
    }

    pub fn set_ui_state(&mut self, campaign: &CampaignId, state: CampaignUiState) {
        self.ui.set(campaign.clone(), state);
        self.bus.publish(Event::UiUpdated {
            campaign_id: campaign.clone(),
        });
    }

    pub fn set_full_sequence_mode(&mut self, campaign: &CampaignId, enabled: bool) {
        self.ui.set_full_sequence_mode(campaign, enabled);
        self.bus.publish(Event::ModeChanged {
            campaign_id: campaign.clone(),
            full_sequence_mode: enabled,
        });
    }

    pub fn push_guidance(&mut self, campaign: &CampaignId, message: GuidanceMessage) {
        let phase = message.phase;
        self.ui.push_guidance(campaign, message);
        self.bus.publish(Event::GuidancePushed {
            campaign_id: campaign.clone(),
            phase,
        });
    }

    pub fn clear_guidance(&mut self, campaign: &CampaignId) {
        self.ui.clear_guidance(campaign);
        self.bus.publish(Event::GuidanceCleared {
            campaign_id: campaign.clone(),
        });
    }

    pub fn set_last_failed_phase(&mut self, campaign: &CampaignId, phase: Option<PhaseKey>) {
        self.ui.set_last_failed_phase(campaign, phase);
        self.publish_ui(campaign);
    }

    pub fn set_selected_phase(&mut self, campaign: &CampaignId, phase: Option<PhaseKey>) {
        self.ui.set_selected_phase(campaign, phase);
        self.publish_ui(campaign);
    }

    pub fn set_preflight_open(&mut self, campaign: &CampaignId, open: bool) {
        self.ui.set_preflight_open(campaign, open);
        self.publish_ui(campaign);
    }

    fn publish_ui(&self, campaign: &CampaignId) {
        self.bus.publish(Event::UiUpdated {
            campaign_id: campaign.clone(),
        });
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
