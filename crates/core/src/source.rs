// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only boundaries to externally owned state
//!
//! The engine never owns status, runtime or UI data. It reads them through
//! these traits, which the storage crate (or a caller's own stores) implement.

use crate::campaign::{CampaignId, CampaignUiState};
use crate::phase::PhaseKey;
use crate::runtime::CampaignRuntime;
use crate::status::StatusRecord;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Arguments a flat cache entry was fetched with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusArgs {
    pub campaign_id: CampaignId,
    /// Phase name as sent to the endpoint; not validated
    pub phase: String,
}

/// One entry of a flat status cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEntry {
    /// Identity of the endpoint that produced the entry
    pub endpoint: String,
    pub args: StatusArgs,
    #[serde(default)]
    pub data: Option<StatusRecord>,
}

impl StatusEntry {
    pub fn matches(&self, endpoint: &str, campaign: &CampaignId, phase: PhaseKey) -> bool {
        self.endpoint == endpoint
            && self.args.campaign_id == *campaign
            && self.args.phase == phase.as_str()
    }
}

/// Keyed O(1) access to status records
pub trait KeyedStatus {
    fn status(&self, campaign: &CampaignId, phase: PhaseKey) -> Option<&StatusRecord>;
}

/// How a status source can be read
pub enum StatusAccess<'a> {
    /// Direct lookup by (campaign, phase)
    Keyed(&'a dyn KeyedStatus),
    /// Only a flat collection; callers scan it
    Flat(&'a [StatusEntry]),
}

/// A source of raw phase status
pub trait StatusSource {
    fn access(&self) -> StatusAccess<'_>;
}

/// A source of per-campaign execution runtime.
///
/// Implementations must return one shared value for every campaign without
/// data, so callers can compare results by pointer.
pub trait RuntimeSource {
    fn runtime(&self, campaign: &CampaignId) -> Arc<CampaignRuntime>;
}

/// A source of per-campaign UI state.
///
/// Same sharing contract as [`RuntimeSource`] for campaigns without state.
pub trait UiStateSource {
    fn ui_state(&self, campaign: &CampaignId) -> Arc<CampaignUiState>;
}

/// Borrowed view over the three external sources for one query
#[derive(Clone, Copy)]
pub struct Sources<'a> {
    pub status: &'a dyn StatusSource,
    pub runtime: &'a dyn RuntimeSource,
    pub ui: &'a dyn UiStateSource,
}

impl<'a> Sources<'a> {
    pub fn new(
        status: &'a dyn StatusSource,
        runtime: &'a dyn RuntimeSource,
        ui: &'a dyn UiStateSource,
    ) -> Self {
        Self { status, runtime, ui }
    }
}
