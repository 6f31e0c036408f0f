// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-campaign phase projection

use crate::selector::SelectorCache;
use cpo_core::{CampaignId, PhaseKey, StatusSource, UiPipelinePhase, PHASE_COUNT};

/// Every phase of a campaign, in the fixed order
pub type Phases = [UiPipelinePhase; PHASE_COUNT];

/// Project all four phases of a campaign
pub fn project_phases(
    selectors: &SelectorCache,
    source: &dyn StatusSource,
    campaign: &CampaignId,
) -> Phases {
    PhaseKey::ALL.map(|phase| selectors.selector(campaign, phase).project(source))
}

/// Reported progress per phase, as whole percentages
pub fn reported_progress(
    selectors: &SelectorCache,
    source: &dyn StatusSource,
    campaign: &CampaignId,
) -> [Option<u8>; PHASE_COUNT] {
    PhaseKey::ALL.map(|phase| {
        selectors
            .selector(campaign, phase)
            .select(source)
            .and_then(|record| record.progress_percent())
    })
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;
