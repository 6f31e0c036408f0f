// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cpo-core: domain types for campaign phase orchestration
//!
//! This crate provides:
//! - The fixed phase sequence and the raw-status projection
//! - Execution events and per-phase runtime entries
//! - Read-only source traits for externally owned state
//! - Change notification (event bus)

pub mod clock;

pub mod campaign;
pub mod event;
pub mod events;
pub mod phase;
pub mod runtime;
pub mod source;
pub mod status;

// Re-exports
pub use campaign::{AdvanceMode, CampaignId, CampaignUiState, GuidanceMessage};
pub use clock::{Clock, FakeClock, SystemClock};
pub use event::Event;
pub use events::{EventBus, EventPattern, EventReceiver, SubscriberId, Subscription};
pub use phase::{ParsePhaseError, PhaseKey, PHASE_COUNT};
pub use runtime::{CampaignRuntime, ExecRuntimeEntry, ExecutionEvent, RunStatus};
pub use source::{
    KeyedStatus, RuntimeSource, Sources, StatusAccess, StatusArgs, StatusEntry, StatusSource,
    UiStateSource,
};
pub use status::{project, ConfigState, ExecState, RawStatus, StatusRecord, UiPipelinePhase};
