// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw status stores
//!
//! [`StatusStore`] is keyed by (campaign, phase) and answers lookups directly.
//! [`StatusCache`] mirrors a client-side response cache: a flat list of
//! entries tagged with the endpoint and arguments they were fetched with.

use cpo_core::{
    CampaignId, KeyedStatus, PhaseKey, StatusAccess, StatusArgs, StatusEntry, StatusRecord,
    StatusSource,
};
use std::collections::HashMap;

/// Default endpoint identity for phase status entries
pub const PHASE_STATUS_ENDPOINT: &str = "phase_status";

/// Keyed status store
#[derive(Debug, Clone, Default)]
pub struct StatusStore {
    records: HashMap<CampaignId, HashMap<PhaseKey, StatusRecord>>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the record for a phase
    pub fn set(&mut self, campaign: CampaignId, phase: PhaseKey, record: StatusRecord) {
        self.records.entry(campaign).or_default().insert(phase, record);
    }

    pub fn remove(&mut self, campaign: &CampaignId, phase: PhaseKey) -> Option<StatusRecord> {
        self.records.get_mut(campaign)?.remove(&phase)
    }

    pub fn len(&self) -> usize {
        self.records.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into cache entries tagged with `endpoint`, ordered by campaign then phase
    pub fn to_entries(&self, endpoint: &str) -> Vec<StatusEntry> {
        let mut campaigns: Vec<_> = self.records.keys().collect();
        campaigns.sort();
        let mut entries = Vec::new();
        for campaign in campaigns {
            for phase in PhaseKey::ALL {
                if let Some(record) = self.status(campaign, phase) {
                    entries.push(StatusEntry {
                        endpoint: endpoint.to_string(),
                        args: StatusArgs {
                            campaign_id: campaign.clone(),
                            phase: phase.as_str().to_string(),
                        },
                        data: Some(record.clone()),
                    });
                }
            }
        }
        entries
    }
}

impl KeyedStatus for StatusStore {
    fn status(&self, campaign: &CampaignId, phase: PhaseKey) -> Option<&StatusRecord> {
        self.records.get(campaign)?.get(&phase)
    }
}

impl StatusSource for StatusStore {
    fn access(&self) -> StatusAccess<'_> {
        StatusAccess::Keyed(self)
    }
}

/// Flat status cache, only scannable
#[derive(Debug, Clone, Default)]
pub struct StatusCache {
    entries: Vec<StatusEntry>,
}

impl StatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<StatusEntry>) -> Self {
        Self { entries }
    }

    /// Append an entry. Later entries shadow earlier ones for the same key.
    pub fn push(&mut self, entry: StatusEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }
}

impl StatusSource for StatusCache {
    fn access(&self) -> StatusAccess<'_> {
        StatusAccess::Flat(&self.entries)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
