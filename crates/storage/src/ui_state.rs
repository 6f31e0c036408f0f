// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Campaign UI state store

use cpo_core::{CampaignId, CampaignUiState, GuidanceMessage, PhaseKey, UiStateSource};
use std::collections::HashMap;
use std::sync::Arc;

/// Console state per campaign, copy-on-write behind `Arc`
#[derive(Debug)]
pub struct UiStateStore {
    states: HashMap<CampaignId, Arc<CampaignUiState>>,
    default: Arc<CampaignUiState>,
}

impl Default for UiStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UiStateStore {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            default: Arc::new(CampaignUiState::default()),
        }
    }

    /// Replace the whole state for a campaign
    pub fn set(&mut self, campaign: CampaignId, state: CampaignUiState) {
        self.states.insert(campaign, Arc::new(state));
    }

    fn state_mut(&mut self, campaign: &CampaignId) -> &mut CampaignUiState {
        let slot = self
            .states
            .entry(campaign.clone())
            .or_insert_with(|| Arc::new(CampaignUiState::default()));
        Arc::make_mut(slot)
    }

    pub fn set_full_sequence_mode(&mut self, campaign: &CampaignId, enabled: bool) {
        self.state_mut(campaign).full_sequence_mode = enabled;
    }

    pub fn push_guidance(&mut self, campaign: &CampaignId, message: GuidanceMessage) {
        self.state_mut(campaign).guidance_messages.push(message);
    }

    pub fn clear_guidance(&mut self, campaign: &CampaignId) {
        self.state_mut(campaign).guidance_messages.clear();
    }

    pub fn set_last_failed_phase(&mut self, campaign: &CampaignId, phase: Option<PhaseKey>) {
        self.state_mut(campaign).last_failed_phase = phase;
    }

    pub fn set_selected_phase(&mut self, campaign: &CampaignId, phase: Option<PhaseKey>) {
        self.state_mut(campaign).selected_phase = phase;
    }

    pub fn set_preflight_open(&mut self, campaign: &CampaignId, open: bool) {
        self.state_mut(campaign).preflight_open = open;
    }
}

impl UiStateSource for UiStateStore {
    fn ui_state(&self, campaign: &CampaignId) -> Arc<CampaignUiState> {
        self.states
            .get(campaign)
            .map(Arc::clone)
            .unwrap_or_else(|| Arc::clone(&self.default))
    }
}
