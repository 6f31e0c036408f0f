// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cpo-storage: in-memory stores for externally owned campaign state

mod document;
mod exec_log;
mod status;
mod store;
mod ui_state;

pub use document::{CampaignDocument, StorageError};
pub use exec_log::{ApplyError, ExecutionLog};
pub use status::{StatusCache, StatusStore, PHASE_STATUS_ENDPOINT};
pub use store::CampaignStore;
pub use ui_state::UiStateStore;
