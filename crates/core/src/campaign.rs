// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Campaign identity and operator-facing UI state

use crate::phase::PhaseKey;
use serde::{Deserialize, Serialize};

/// Unique identifier for a campaign
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(pub String);

impl CampaignId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CampaignId {
    fn from(s: String) -> Self {
        CampaignId(s)
    }
}

impl From<&str> for CampaignId {
    fn from(s: &str) -> Self {
        CampaignId(s.to_string())
    }
}

/// An advisory shown to the operator, scoped to one phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceMessage {
    pub phase: PhaseKey,
    pub text: String,
}

impl GuidanceMessage {
    pub fn new(phase: PhaseKey, text: impl Into<String>) -> Self {
        Self {
            phase,
            text: text.into(),
        }
    }
}

/// Console state for one campaign, owned outside the engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignUiState {
    /// Automatic (strict) advancement when true, step-by-step otherwise
    #[serde(default)]
    pub full_sequence_mode: bool,
    #[serde(default)]
    pub guidance_messages: Vec<GuidanceMessage>,
    #[serde(default)]
    pub last_failed_phase: Option<PhaseKey>,
    #[serde(default)]
    pub selected_phase: Option<PhaseKey>,
    #[serde(default)]
    pub preflight_open: bool,
}

/// How phases advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceMode {
    /// Step-by-step: only strictly preceding phases gate a start
    Manual,
    /// Full sequence: every phase must be configured before anything starts
    Automatic,
}

impl AdvanceMode {
    pub fn from_full_sequence(full_sequence_mode: bool) -> Self {
        if full_sequence_mode {
            AdvanceMode::Automatic
        } else {
            AdvanceMode::Manual
        }
    }

    pub fn is_automatic(&self) -> bool {
        matches!(self, AdvanceMode::Automatic)
    }
}

impl CampaignUiState {
    pub fn mode(&self) -> AdvanceMode {
        AdvanceMode::from_full_sequence(self.full_sequence_mode)
    }
}
