// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Guidance queue projection

use cpo_core::{CampaignUiState, GuidanceMessage, PhaseKey};
use serde::Serialize;

/// Queued operator advisories for a campaign
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GuidanceQueue {
    pub queue: Vec<GuidanceMessage>,
    pub latest: Option<GuidanceMessage>,
    pub count: usize,
}

impl GuidanceQueue {
    pub fn from_ui(ui: &CampaignUiState) -> Self {
        Self::from_messages(&ui.guidance_messages)
    }

    pub fn from_messages(messages: &[GuidanceMessage]) -> Self {
        Self {
            queue: messages.to_vec(),
            latest: messages.last().cloned(),
            count: messages.len(),
        }
    }
}

/// Messages for one phase, oldest first
pub fn guidance_for_phase(ui: &CampaignUiState, phase: PhaseKey) -> Vec<GuidanceMessage> {
    ui.guidance_messages
        .iter()
        .filter(|m| m.phase == phase)
        .cloned()
        .collect()
}
