// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase status projection
//!
//! The status feed reports a loosely-typed string per (campaign, phase).
//! This module closes it into [`RawStatus`] and projects it onto the two
//! axes the engine reasons about: configuration and execution.

use crate::phase::PhaseKey;
use serde::{Deserialize, Serialize};

/// Raw status reported by the status feed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawStatus {
    NotStarted,
    Configured,
    Running,
    InProgress,
    Paused,
    Completed,
    Failed,
    /// Any status string the engine does not recognise
    Unknown(String),
}

impl RawStatus {
    /// Parse a status string. Empty strings count as absent.
    pub fn parse(raw: Option<&str>) -> Option<RawStatus> {
        let raw = raw?;
        let status = match raw {
            "" => return None,
            "not_started" => RawStatus::NotStarted,
            "configured" => RawStatus::Configured,
            "running" => RawStatus::Running,
            "in_progress" => RawStatus::InProgress,
            "paused" => RawStatus::Paused,
            "completed" => RawStatus::Completed,
            "failed" => RawStatus::Failed,
            other => RawStatus::Unknown(other.to_string()),
        };
        Some(status)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RawStatus::NotStarted => "not_started",
            RawStatus::Configured => "configured",
            RawStatus::Running => "running",
            RawStatus::InProgress => "in_progress",
            RawStatus::Paused => "paused",
            RawStatus::Completed => "completed",
            RawStatus::Failed => "failed",
            RawStatus::Unknown(s) => s,
        }
    }
}

impl std::fmt::Display for RawStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for RawStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Whether a phase has a stored configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigState {
    Missing,
    Valid,
}

/// Runtime lifecycle of a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecState {
    Idle,
    Running,
    Completed,
    Failed,
}

impl ExecState {
    pub const ALL: [ExecState; 4] = [
        ExecState::Idle,
        ExecState::Running,
        ExecState::Completed,
        ExecState::Failed,
    ];

    /// Completed or failed. A resolved predecessor no longer gates its successor.
    pub fn is_resolved(&self) -> bool {
        matches!(self, ExecState::Completed | ExecState::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecState::Idle => "idle",
            ExecState::Running => "running",
            ExecState::Completed => "completed",
            ExecState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ExecState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::fmt::Display for ConfigState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigState::Missing => f.pad("missing"),
            ConfigState::Valid => f.pad("valid"),
        }
    }
}

/// Map a raw status onto the (config, exec) pair.
///
/// Total: absent and `not_started` are unconfigured and idle, every other
/// status counts as configured.
pub fn project(raw: Option<&RawStatus>) -> (ConfigState, ExecState) {
    let Some(raw) = raw else {
        return (ConfigState::Missing, ExecState::Idle);
    };
    let config = match raw {
        RawStatus::NotStarted => ConfigState::Missing,
        _ => ConfigState::Valid,
    };
    let exec = match raw {
        RawStatus::Running | RawStatus::InProgress | RawStatus::Paused => ExecState::Running,
        RawStatus::Completed => ExecState::Completed,
        RawStatus::Failed => ExecState::Failed,
        _ => ExecState::Idle,
    };
    (config, exec)
}

/// Status payload for one (campaign, phase) as delivered by the status feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_processed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl StatusRecord {
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    pub fn raw_status(&self) -> Option<RawStatus> {
        RawStatus::parse(self.status.as_deref())
    }

    /// Reported progress as a whole percentage, if the feed carries any
    pub fn progress_percent(&self) -> Option<u8> {
        if let Some(pct) = self.progress_pct.filter(|p| p.is_finite()) {
            return Some(pct.clamp(0.0, 100.0).round() as u8);
        }
        match (self.items_processed, self.items_total) {
            (Some(done), Some(total)) if total > 0 => {
                let pct = (done.min(total) as f64 * 100.0 / total as f64).round();
                Some(pct as u8)
            }
            _ => None,
        }
    }
}

/// One phase as the console sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiPipelinePhase {
    pub key: PhaseKey,
    pub config_state: ConfigState,
    pub exec_state: ExecState,
    pub status_raw: Option<RawStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl UiPipelinePhase {
    /// Project a phase from its (possibly absent) status record
    pub fn from_record(key: PhaseKey, record: Option<&StatusRecord>) -> Self {
        let status_raw = record.and_then(StatusRecord::raw_status);
        let (config_state, exec_state) = project(status_raw.as_ref());
        Self {
            key,
            config_state,
            exec_state,
            status_raw,
            last_error: record.and_then(|r| r.last_error.clone()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config_state == ConfigState::Valid
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
