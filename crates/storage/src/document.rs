// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Campaign documents
//!
//! A JSON snapshot of everything the engine reads for one campaign: status
//! records, execution events and console state.

use crate::exec_log::ApplyError;
use crate::status::StatusCache;
use crate::store::CampaignStore;
use cpo_core::{
    CampaignId, CampaignUiState, ExecutionEvent, GuidanceMessage, PhaseKey, StatusArgs,
    StatusEntry, StatusRecord,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading a campaign document
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid campaign document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode campaign document {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// On-disk campaign snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDocument {
    pub campaign_id: CampaignId,
    #[serde(default)]
    pub full_sequence_mode: bool,
    #[serde(default)]
    pub statuses: BTreeMap<PhaseKey, StatusRecord>,
    #[serde(default)]
    pub events: Vec<ExecutionEvent>,
    #[serde(default)]
    pub guidance: Vec<GuidanceMessage>,
    #[serde(default)]
    pub last_failed_phase: Option<PhaseKey>,
    #[serde(default)]
    pub selected_phase: Option<PhaseKey>,
    #[serde(default)]
    pub preflight_open: bool,
}

impl CampaignDocument {
    /// Read and parse a document from disk
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let text = std::fs::read_to_string(path).map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Self::from_json(&text).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            campaign = %doc.campaign_id,
            events = doc.events.len(),
            "campaign document loaded"
        );
        Ok(doc)
    }

    /// Write the document back as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        let mut text = serde_json::to_string_pretty(self).map_err(|source| {
            StorageError::Encode {
                path: path.to_path_buf(),
                source,
            }
        })?;
        text.push('\n');
        std::fs::write(path, text).map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            campaign = %self.campaign_id,
            events = self.events.len(),
            "campaign document saved"
        );
        Ok(())
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn ui_state(&self) -> CampaignUiState {
        CampaignUiState {
            full_sequence_mode: self.full_sequence_mode,
            guidance_messages: self.guidance.clone(),
            last_failed_phase: self.last_failed_phase,
            selected_phase: self.selected_phase,
            preflight_open: self.preflight_open,
        }
    }

    /// Events that belong to this document's campaign
    pub fn own_events(&self) -> impl Iterator<Item = &ExecutionEvent> {
        self.events
            .iter()
            .filter(move |e| e.campaign_id() == &self.campaign_id)
    }

    /// Populate a store with statuses and UI state only; events are left to the caller
    pub fn seed(&self, store: &mut CampaignStore) {
        for (phase, record) in &self.statuses {
            store.set_status(&self.campaign_id, *phase, record.clone());
        }
        store.set_ui_state(&self.campaign_id, self.ui_state());
    }

    /// Build a fully populated store. Returns rejected events alongside.
    pub fn build_store(&self) -> (CampaignStore, Vec<ApplyError>) {
        let mut store = CampaignStore::new();
        self.seed(&mut store);
        let mut rejected = Vec::new();
        for event in self.own_events() {
            if let Err(e) = store.record(event) {
                tracing::warn!(event = event.name(), error = %e, "execution event rejected");
                rejected.push(e);
            }
        }
        (store, rejected)
    }

    /// Statuses as a flat cache, as a response cache would hold them
    pub fn status_cache(&self, endpoint: &str) -> StatusCache {
        let entries = self
            .statuses
            .iter()
            .map(|(phase, record)| StatusEntry {
                endpoint: endpoint.to_string(),
                args: StatusArgs {
                    campaign_id: self.campaign_id.clone(),
                    phase: phase.as_str().to_string(),
                },
                data: Some(record.clone()),
            })
            .collect();
        StatusCache::from_entries(entries)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
