// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Change notification for campaign state
//!
//! Stores publish an [`Event`](crate::event::Event) for every mutation.
//! Consumers subscribe with name patterns (optionally scoped to one campaign)
//! and re-run their queries when something arrives. Nothing recomputes
//! implicitly.

mod bus;
mod subscription;

pub use bus::{EventBus, EventReceiver, EventSender};
pub use subscription::{EventPattern, SubscriberId, Subscription};
