// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cpo-engine: derived phase state for campaigns
//!
//! Projects raw status into typed phases, gates starts, resolves the next
//! operator action and aggregates a memoized overview.

pub mod action;
mod config;
mod engine;
mod error;
pub mod gating;
pub mod guidance;
pub mod memo;
pub mod overview;
pub mod projector;
pub mod runtime;
pub mod selector;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use action::{resolve_next_action, ConfigureReason, NextAction};
pub use config::{EngineConfig, ModeLabels, DEFAULT_STATUS_ENDPOINT};
pub use engine::PhaseEngine;
pub use error::ConfigError;
pub use gating::BlockReason;
pub use guidance::GuidanceQueue;
pub use overview::{Overview, OverviewMemo, PhaseMarkers};
pub use projector::Phases;
pub use runtime::{EnrichedPhase, EnrichedPhases};
pub use selector::{PhaseSelector, SelectorCache};
pub use summary::{
    ConfigProgress, ExecSummary, FailureInfo, ModeDescriptor, OverallProgress, PhaseProgressMap,
    PreflightStatus, StartCta, StartEligibility,
};
