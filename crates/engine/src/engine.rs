// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase engine query surface
//!
//! [`PhaseEngine`] owns the selector cache and the per-campaign overview memo
//! tables. Every query is a pure read of the [`Sources`] it is handed; callers
//! re-run queries when the store notifies them of a change.

use crate::action::{resolve_next_action, NextAction};
use crate::config::EngineConfig;
use crate::gating::{self, BlockReason};
use crate::guidance::{self, GuidanceQueue};
use crate::overview::{Overview, OverviewInputs, OverviewMemo};
use crate::projector::{project_phases, reported_progress, Phases};
use crate::runtime::{enrich, EnrichedPhases};
use crate::selector::SelectorCache;
use crate::summary::{
    self, ConfigProgress, ExecSummary, ModeDescriptor, OverallProgress, PhaseProgressMap,
    PreflightStatus, StartCta, StartEligibility,
};
use cpo_core::{
    AdvanceMode, CampaignId, CampaignRuntime, GuidanceMessage, PhaseKey, Sources,
    UiPipelinePhase,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Derived-state engine for campaign phases
#[derive(Debug)]
pub struct PhaseEngine {
    config: EngineConfig,
    selectors: SelectorCache,
    overviews: Mutex<HashMap<CampaignId, OverviewMemo>>,
}

impl Default for PhaseEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl PhaseEngine {
    pub fn new(config: EngineConfig) -> Self {
        let selectors = SelectorCache::new(&config.status_endpoint);
        Self {
            config,
            selectors,
            overviews: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn selectors(&self) -> &SelectorCache {
        &self.selectors
    }

    /// Drop cached selectors and memo tables for a campaign
    pub fn forget(&self, campaign: &CampaignId) {
        self.selectors.forget(campaign);
        let mut overviews = self.overviews.lock().unwrap_or_else(|e| e.into_inner());
        overviews.remove(campaign);
    }

    // -- phases --

    pub fn phases(&self, sources: Sources<'_>, campaign: &CampaignId) -> Phases {
        project_phases(&self.selectors, sources.status, campaign)
    }

    pub fn phase(
        &self,
        sources: Sources<'_>,
        campaign: &CampaignId,
        phase: PhaseKey,
    ) -> UiPipelinePhase {
        self.selectors.selector(campaign, phase).project(sources.status)
    }

    /// Position of a phase in the fixed order
    pub fn phase_index(phase: PhaseKey) -> usize {
        phase.index()
    }

    pub fn missing_phases(&self, sources: Sources<'_>, campaign: &CampaignId) -> Vec<PhaseKey> {
        gating::missing_phases(&self.phases(sources, campaign))
    }

    pub fn all_configured(&self, sources: Sources<'_>, campaign: &CampaignId) -> bool {
        self.missing_phases(sources, campaign).is_empty()
    }

    pub fn first_unconfigured(
        &self,
        sources: Sources<'_>,
        campaign: &CampaignId,
    ) -> Option<PhaseKey> {
        gating::first_missing(&self.phases(sources, campaign))
    }

    pub fn config_progress(&self, sources: Sources<'_>, campaign: &CampaignId) -> ConfigProgress {
        ConfigProgress::from_phases(&self.phases(sources, campaign))
    }

    // -- gating --

    pub fn mode(&self, sources: Sources<'_>, campaign: &CampaignId) -> AdvanceMode {
        sources.ui.ui_state(campaign).mode()
    }

    pub fn start_blocking_reasons(
        &self,
        sources: Sources<'_>,
        campaign: &CampaignId,
    ) -> Vec<BlockReason> {
        gating::start_blocking_reasons(
            &self.phases(sources, campaign),
            self.mode(sources, campaign),
        )
    }

    pub fn can_start_full_sequence(&self, sources: Sources<'_>, campaign: &CampaignId) -> bool {
        self.start_blocking_reasons(sources, campaign).is_empty()
    }

    pub fn start_eligibility(
        &self,
        sources: Sources<'_>,
        campaign: &CampaignId,
    ) -> StartEligibility {
        StartEligibility::new(
            &self.phases(sources, campaign),
            self.mode(sources, campaign),
        )
    }

    pub fn active_execution_phase(
        &self,
        sources: Sources<'_>,
        campaign: &CampaignId,
    ) -> Option<PhaseKey> {
        gating::active_execution_phase(&self.phases(sources, campaign))
    }

    pub fn next_runnable_phase(
        &self,
        sources: Sources<'_>,
        campaign: &CampaignId,
    ) -> Option<PhaseKey> {
        gating::next_runnable_phase(&self.phases(sources, campaign))
    }

    pub fn remaining_runnable_count(&self, sources: Sources<'_>, campaign: &CampaignId) -> usize {
        gating::remaining_runnable_count(&self.phases(sources, campaign))
    }

    // -- execution --

    pub fn exec_summary(&self, sources: Sources<'_>, campaign: &CampaignId) -> ExecSummary {
        ExecSummary::from_phases(&self.phases(sources, campaign))
    }

    /// Runtime entries as held by the log; shared empty value when none
    pub fn exec_runtime(
        &self,
        sources: Sources<'_>,
        campaign: &CampaignId,
    ) -> Arc<CampaignRuntime> {
        sources.runtime.runtime(campaign)
    }

    pub fn phases_enriched(&self, sources: Sources<'_>, campaign: &CampaignId) -> EnrichedPhases {
        enrich(
            &self.phases(sources, campaign),
            &sources.runtime.runtime(campaign),
        )
    }

    pub fn overall_progress(&self, sources: Sources<'_>, campaign: &CampaignId) -> OverallProgress {
        OverallProgress::from_phases(&self.phases(sources, campaign))
    }

    pub fn phase_progress_map(
        &self,
        sources: Sources<'_>,
        campaign: &CampaignId,
    ) -> PhaseProgressMap {
        summary::phase_progress(
            &self.phases(sources, campaign),
            &reported_progress(&self.selectors, sources.status, campaign),
        )
    }

    // -- failures --

    pub fn last_failed_phase(
        &self,
        sources: Sources<'_>,
        campaign: &CampaignId,
    ) -> Option<PhaseKey> {
        let recorded = sources.ui.ui_state(campaign).last_failed_phase;
        summary::last_failed_phase(&self.phases(sources, campaign), recorded)
    }

    pub fn failed_phases(&self, sources: Sources<'_>, campaign: &CampaignId) -> Vec<PhaseKey> {
        summary::failed_phases(&self.phases(sources, campaign))
    }

    pub fn retry_eligible_phases(
        &self,
        sources: Sources<'_>,
        campaign: &CampaignId,
    ) -> Vec<PhaseKey> {
        summary::retry_eligible_phases(&self.phases(sources, campaign))
    }

    // -- mode and actions --

    pub fn auto_advance_enabled(&self, sources: Sources<'_>, campaign: &CampaignId) -> bool {
        sources.ui.ui_state(campaign).full_sequence_mode
    }

    pub fn mode_descriptor(&self, sources: Sources<'_>, campaign: &CampaignId) -> ModeDescriptor {
        ModeDescriptor::new(
            self.auto_advance_enabled(sources, campaign),
            &self.config.labels,
        )
    }

    pub fn next_user_action(&self, sources: Sources<'_>, campaign: &CampaignId) -> NextAction {
        resolve_next_action(
            &self.phases(sources, campaign),
            self.mode(sources, campaign),
        )
    }

    pub fn preflight_status(
        &self,
        sources: Sources<'_>,
        campaign: &CampaignId,
    ) -> PreflightStatus {
        let phases = self.phases(sources, campaign);
        let ui = sources.ui.ui_state(campaign);
        let eligibility = StartEligibility::new(&phases, ui.mode());
        PreflightStatus::new(&phases, &eligibility, ui.preflight_open)
    }

    pub fn start_cta_state(&self, sources: Sources<'_>, campaign: &CampaignId) -> StartCta {
        let phases = self.phases(sources, campaign);
        let mode = self.mode(sources, campaign);
        let eligibility = StartEligibility::new(&phases, mode);
        StartCta::new(&phases, &eligibility, mode)
    }

    // -- guidance --

    pub fn guidance_queue(&self, sources: Sources<'_>, campaign: &CampaignId) -> GuidanceQueue {
        GuidanceQueue::from_ui(&sources.ui.ui_state(campaign))
    }

    pub fn latest_guidance(
        &self,
        sources: Sources<'_>,
        campaign: &CampaignId,
    ) -> Option<GuidanceMessage> {
        sources
            .ui
            .ui_state(campaign)
            .guidance_messages
            .last()
            .cloned()
    }

    pub fn guidance_count(&self, sources: Sources<'_>, campaign: &CampaignId) -> usize {
        sources.ui.ui_state(campaign).guidance_messages.len()
    }

    pub fn guidance_for_phase(
        &self,
        sources: Sources<'_>,
        campaign: &CampaignId,
        phase: PhaseKey,
    ) -> Vec<GuidanceMessage> {
        guidance::guidance_for_phase(&sources.ui.ui_state(campaign), phase)
    }

    // -- overview --

    /// Memoized overview; identical inputs return the same `Arc`
    pub fn overview(&self, sources: Sources<'_>, campaign: &CampaignId) -> Arc<Overview> {
        let inputs = OverviewInputs {
            campaign,
            phases: self.phases(sources, campaign),
            reported_progress: reported_progress(&self.selectors, sources.status, campaign),
            runtime: sources.runtime.runtime(campaign),
            ui: sources.ui.ui_state(campaign),
            labels: &self.config.labels,
        };
        let mut overviews = self.overviews.lock().unwrap_or_else(|e| e.into_inner());
        overviews
            .entry(campaign.clone())
            .or_default()
            .compute(inputs)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
