// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-(campaign, phase) status selectors
//!
//! A [`PhaseSelector`] knows how to find the status record for one campaign
//! phase in any [`StatusSource`]. Selectors are built lazily and kept in a
//! [`SelectorCache`] owned by the engine, so repeated queries reuse them.

use cpo_core::{
    CampaignId, PhaseKey, StatusAccess, StatusRecord, StatusSource, UiPipelinePhase, PHASE_COUNT,
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Looks up the status of one (campaign, phase)
#[derive(Debug)]
pub struct PhaseSelector {
    campaign: CampaignId,
    phase: PhaseKey,
    endpoint: Arc<str>,
}

impl PhaseSelector {
    pub fn new(campaign: CampaignId, phase: PhaseKey, endpoint: Arc<str>) -> Self {
        Self {
            campaign,
            phase,
            endpoint,
        }
    }

    pub fn campaign(&self) -> &CampaignId {
        &self.campaign
    }

    pub fn phase(&self) -> PhaseKey {
        self.phase
    }

    /// Find the raw record.
    ///
    /// Keyed sources are read directly. Flat sources are scanned for entries
    /// of this selector's endpoint, campaign and phase; the last match wins.
    pub fn select<'s>(&self, source: &'s dyn StatusSource) -> Option<&'s StatusRecord> {
        match source.access() {
            StatusAccess::Keyed(keyed) => keyed.status(&self.campaign, self.phase),
            StatusAccess::Flat(entries) => entries
                .iter()
                .rev()
                .find(|e| e.matches(&self.endpoint, &self.campaign, self.phase))
                .and_then(|e| e.data.as_ref()),
        }
    }

    /// Project the phase from whatever the source currently holds
    pub fn project(&self, source: &dyn StatusSource) -> UiPipelinePhase {
        UiPipelinePhase::from_record(self.phase, self.select(source))
    }
}

type CampaignSelectors = [Option<Arc<PhaseSelector>>; PHASE_COUNT];

/// Lazily populated selector table.
///
/// Reads take the shared lock; a miss retakes the lock exclusively and
/// re-checks the slot before inserting, so concurrent first access for the
/// same key still builds exactly one selector.
#[derive(Debug)]
pub struct SelectorCache {
    endpoint: Arc<str>,
    selectors: RwLock<HashMap<CampaignId, CampaignSelectors>>,
}

impl SelectorCache {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: Arc::from(endpoint),
            selectors: RwLock::new(HashMap::new()),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Selector for (campaign, phase), created on first use
    pub fn selector(&self, campaign: &CampaignId, phase: PhaseKey) -> Arc<PhaseSelector> {
        let slot = phase.index();
        {
            let selectors = self.selectors.read().unwrap_or_else(|e| e.into_inner());
            if let Some(found) = selectors.get(campaign).and_then(|s| s[slot].as_ref()) {
                return Arc::clone(found);
            }
        }

        let mut selectors = self.selectors.write().unwrap_or_else(|e| e.into_inner());
        let entry = &mut selectors.entry(campaign.clone()).or_default()[slot];
        if let Some(found) = entry {
            return Arc::clone(found);
        }
        tracing::debug!(campaign = %campaign, phase = %phase, "creating phase selector");
        let created = Arc::new(PhaseSelector::new(
            campaign.clone(),
            phase,
            Arc::clone(&self.endpoint),
        ));
        *entry = Some(Arc::clone(&created));
        created
    }

    /// Number of selectors built so far
    pub fn len(&self) -> usize {
        let selectors = self.selectors.read().unwrap_or_else(|e| e.into_inner());
        selectors
            .values()
            .map(|slots| slots.iter().filter(|s| s.is_some()).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every selector for a campaign
    pub fn forget(&self, campaign: &CampaignId) {
        let mut selectors = self.selectors.write().unwrap_or_else(|e| e.into_inner());
        selectors.remove(campaign);
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
