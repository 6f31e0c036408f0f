// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Campaign phase keys
//!
//! A campaign always runs the same four phases in the same order. The order is
//! load-bearing: gating checks look at every phase *preceding* a candidate.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the fixed campaign phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKey {
    Discovery,
    Validation,
    Extraction,
    Analysis,
}

/// Number of phases in every campaign
pub const PHASE_COUNT: usize = 4;

impl PhaseKey {
    /// All phases in execution order
    pub const ALL: [PhaseKey; PHASE_COUNT] = [
        PhaseKey::Discovery,
        PhaseKey::Validation,
        PhaseKey::Extraction,
        PhaseKey::Analysis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKey::Discovery => "discovery",
            PhaseKey::Validation => "validation",
            PhaseKey::Extraction => "extraction",
            PhaseKey::Analysis => "analysis",
        }
    }

    /// Position in the fixed sequence (0-based)
    pub fn index(&self) -> usize {
        match self {
            PhaseKey::Discovery => 0,
            PhaseKey::Validation => 1,
            PhaseKey::Extraction => 2,
            PhaseKey::Analysis => 3,
        }
    }

    pub fn first() -> PhaseKey {
        PhaseKey::Discovery
    }

    pub fn last() -> PhaseKey {
        PhaseKey::Analysis
    }

    /// The phase immediately before this one, if any
    pub fn previous(&self) -> Option<PhaseKey> {
        self.index()
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// The phase immediately after this one, if any
    pub fn next(&self) -> Option<PhaseKey> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Phases strictly before this one, in order
    pub fn preceding(&self) -> &'static [PhaseKey] {
        &Self::ALL[..self.index()]
    }
}

impl std::fmt::Display for PhaseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error parsing a phase name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown phase: {0}")]
pub struct ParsePhaseError(pub String);

impl FromStr for PhaseKey {
    type Err = ParsePhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discovery" => Ok(PhaseKey::Discovery),
            "validation" => Ok(PhaseKey::Validation),
            "extraction" => Ok(PhaseKey::Extraction),
            "analysis" => Ok(PhaseKey::Analysis),
            other => Err(ParsePhaseError(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
