// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Overview aggregation
//!
//! The overview is composed from memoized parts. Each part is recomputed only
//! when its own inputs change, and the whole overview keeps its identity while
//! every part does.

use crate::action::{resolve_next_action, NextAction};
use crate::config::ModeLabels;
use crate::gating::{active_execution_phase, next_runnable_phase, remaining_runnable_count};
use crate::guidance::GuidanceQueue;
use crate::memo::{ByAddress, Interned, Memo};
use crate::projector::Phases;
use crate::runtime::{enrich, EnrichedPhases};
use crate::summary::{
    phase_progress, retry_eligible_phases, ConfigProgress, ExecSummary, FailureInfo,
    ModeDescriptor, OverallProgress, PhaseProgressMap, PreflightStatus, StartCta,
    StartEligibility,
};
use cpo_core::{
    AdvanceMode, CampaignId, CampaignRuntime, CampaignUiState, GuidanceMessage, PhaseKey,
    PHASE_COUNT,
};
use serde::Serialize;
use std::sync::Arc;

/// Phase pointers derived from the phase set alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseMarkers {
    pub active_phase: Option<PhaseKey>,
    pub next_runnable_phase: Option<PhaseKey>,
    pub remaining_runnable: usize,
}

/// Everything the console shows for one campaign
#[derive(Debug, Serialize)]
pub struct Overview {
    pub campaign_id: CampaignId,
    pub phases: Arc<Phases>,
    pub phases_enriched: Arc<EnrichedPhases>,
    pub config_progress: Arc<ConfigProgress>,
    pub exec_summary: Arc<ExecSummary>,
    pub overall_progress: Arc<OverallProgress>,
    pub phase_progress: Arc<PhaseProgressMap>,
    #[serde(flatten)]
    pub markers: Arc<PhaseMarkers>,
    pub mode: Arc<ModeDescriptor>,
    pub failures: Arc<FailureInfo>,
    pub retry_eligible_phases: Arc<Vec<PhaseKey>>,
    pub guidance: Arc<GuidanceQueue>,
    pub start: Arc<StartEligibility>,
    pub preflight: Arc<PreflightStatus>,
    pub start_cta: Arc<StartCta>,
    pub next_action: Arc<NextAction>,
    pub selected_phase: Option<PhaseKey>,
}

impl Overview {
    /// True when both overviews are built from the very same parts
    fn shares_parts(&self, other: &Overview) -> bool {
        self.campaign_id == other.campaign_id
            && self.selected_phase == other.selected_phase
            && Arc::ptr_eq(&self.phases, &other.phases)
            && Arc::ptr_eq(&self.phases_enriched, &other.phases_enriched)
            && Arc::ptr_eq(&self.config_progress, &other.config_progress)
            && Arc::ptr_eq(&self.exec_summary, &other.exec_summary)
            && Arc::ptr_eq(&self.overall_progress, &other.overall_progress)
            && Arc::ptr_eq(&self.phase_progress, &other.phase_progress)
            && Arc::ptr_eq(&self.markers, &other.markers)
            && Arc::ptr_eq(&self.mode, &other.mode)
            && Arc::ptr_eq(&self.failures, &other.failures)
            && Arc::ptr_eq(&self.retry_eligible_phases, &other.retry_eligible_phases)
            && Arc::ptr_eq(&self.guidance, &other.guidance)
            && Arc::ptr_eq(&self.start, &other.start)
            && Arc::ptr_eq(&self.preflight, &other.preflight)
            && Arc::ptr_eq(&self.start_cta, &other.start_cta)
            && Arc::ptr_eq(&self.next_action, &other.next_action)
    }

    pub fn auto_advance(&self) -> bool {
        self.mode.auto_advance
    }
}

/// Raw inputs for one overview computation
pub struct OverviewInputs<'a> {
    pub campaign: &'a CampaignId,
    pub phases: Phases,
    pub reported_progress: [Option<u8>; PHASE_COUNT],
    pub runtime: Arc<CampaignRuntime>,
    pub ui: Arc<CampaignUiState>,
    pub labels: &'a ModeLabels,
}

type PhasesKey = ByAddress<Phases>;

/// Memo tables for one campaign's overview
#[derive(Debug, Default)]
pub struct OverviewMemo {
    phases: Interned<Phases>,
    enriched: Memo<(PhasesKey, ByAddress<CampaignRuntime>), EnrichedPhases>,
    config_progress: Memo<PhasesKey, ConfigProgress>,
    exec_summary: Memo<PhasesKey, ExecSummary>,
    overall_progress: Memo<PhasesKey, OverallProgress>,
    phase_progress: Memo<(PhasesKey, [Option<u8>; PHASE_COUNT]), PhaseProgressMap>,
    markers: Memo<PhasesKey, PhaseMarkers>,
    mode: Memo<bool, ModeDescriptor>,
    failures: Memo<(PhasesKey, Option<PhaseKey>), FailureInfo>,
    retry_eligible: Memo<PhasesKey, Vec<PhaseKey>>,
    guidance: Memo<Vec<GuidanceMessage>, GuidanceQueue>,
    start: Memo<(PhasesKey, AdvanceMode), StartEligibility>,
    preflight: Memo<(PhasesKey, ByAddress<StartEligibility>, bool), PreflightStatus>,
    start_cta: Memo<(PhasesKey, ByAddress<StartEligibility>, AdvanceMode), StartCta>,
    next_action: Memo<(PhasesKey, AdvanceMode), NextAction>,
    last: Option<Arc<Overview>>,
    rebuilt: u64,
}

impl OverviewMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Times a new overview had to be assembled
    pub fn rebuilt(&self) -> u64 {
        self.rebuilt
    }

    pub fn compute(&mut self, inputs: OverviewInputs<'_>) -> Arc<Overview> {
        let OverviewInputs {
            campaign,
            phases,
            reported_progress,
            runtime,
            ui,
            labels,
        } = inputs;
        let mode = ui.mode();
        let phases = self.phases.intern(phases);
        let key = || ByAddress::of(&phases);

        let phases_enriched = self
            .enriched
            .get_or_compute((key(), ByAddress::of(&runtime)), |(p, r)| enrich(&p.0, &r.0));
        let config_progress = self
            .config_progress
            .get_or_compute(key(), |p| ConfigProgress::from_phases(&*p.0));
        let exec_summary = self
            .exec_summary
            .get_or_compute(key(), |p| ExecSummary::from_phases(&*p.0));
        let overall_progress = self
            .overall_progress
            .get_or_compute(key(), |p| OverallProgress::from_phases(&*p.0));
        let phase_progress = self
            .phase_progress
            .get_or_compute((key(), reported_progress), |(p, reported)| {
                phase_progress(&*p.0, reported)
            });
        let markers = self.markers.get_or_compute(key(), |p| PhaseMarkers {
            active_phase: active_execution_phase(&*p.0),
            next_runnable_phase: next_runnable_phase(&*p.0),
            remaining_runnable: remaining_runnable_count(&*p.0),
        });
        let mode_descriptor = self
            .mode
            .get_or_compute(ui.full_sequence_mode, |auto| ModeDescriptor::new(*auto, labels));
        let failures = self
            .failures
            .get_or_compute((key(), ui.last_failed_phase), |(p, recorded)| {
                FailureInfo::new(&*p.0, *recorded)
            });
        let retry_eligible_phases = self
            .retry_eligible
            .get_or_compute(key(), |p| retry_eligible_phases(&*p.0));
        let guidance = self
            .guidance
            .get_or_compute(ui.guidance_messages.clone(), |messages| {
                GuidanceQueue::from_messages(messages)
            });
        let start = self
            .start
            .get_or_compute((key(), mode), |(p, m)| StartEligibility::new(&*p.0, *m));
        let preflight = self.preflight.get_or_compute(
            (key(), ByAddress::of(&start), ui.preflight_open),
            |(p, s, open)| PreflightStatus::new(&*p.0, &s.0, *open),
        );
        let start_cta = self
            .start_cta
            .get_or_compute((key(), ByAddress::of(&start), mode), |(p, s, m)| {
                StartCta::new(&*p.0, &s.0, *m)
            });
        let next_action = self
            .next_action
            .get_or_compute((key(), mode), |(p, m)| resolve_next_action(&*p.0, *m));

        let candidate = Overview {
            campaign_id: campaign.clone(),
            phases,
            phases_enriched,
            config_progress,
            exec_summary,
            overall_progress,
            phase_progress,
            markers,
            mode: mode_descriptor,
            failures,
            retry_eligible_phases,
            guidance,
            start,
            preflight,
            start_cta,
            next_action,
            selected_phase: ui.selected_phase,
        };

        if let Some(last) = &self.last {
            if last.shares_parts(&candidate) {
                return Arc::clone(last);
            }
        }
        self.rebuilt += 1;
        tracing::debug!(campaign = %campaign, rebuilt = self.rebuilt, "overview rebuilt");
        let overview = Arc::new(candidate);
        self.last = Some(Arc::clone(&overview));
        overview
    }
}

#[cfg(test)]
#[path = "overview_tests.rs"]
mod tests;
