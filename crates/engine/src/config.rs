// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Endpoint identity used by the status feed unless configured otherwise
pub const DEFAULT_STATUS_ENDPOINT: &str = "phase_status";

/// Tunables for a [`PhaseEngine`](crate::PhaseEngine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Endpoint identity matched when scanning a flat status cache
    pub status_endpoint: String,
    pub labels: ModeLabels,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            status_endpoint: DEFAULT_STATUS_ENDPOINT.to_string(),
            labels: ModeLabels::default(),
        }
    }
}

/// Operator-facing names of the two advance modes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeLabels {
    pub full_sequence: String,
    pub step_by_step: String,
}

impl Default for ModeLabels {
    fn default() -> Self {
        Self {
            full_sequence: "Full sequence".to_string(),
            step_by_step: "Step by step".to_string(),
        }
    }
}

impl ModeLabels {
    pub fn for_mode(&self, auto_advance: bool) -> &str {
        if auto_advance {
            &self.full_sequence
        } else {
            &self.step_by_step
        }
    }
}

impl EngineConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "engine config loaded");
        Ok(config)
    }

    /// Load `path` when it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
