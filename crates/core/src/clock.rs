// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable event timestamps
//!
//! Execution events carry wall-clock epoch milliseconds.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// A clock that provides the current time in epoch milliseconds
pub trait Clock: Clone + Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Real system clock
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<AtomicI64>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::at(0)
    }

    /// Start the clock at a given epoch millisecond
    pub fn at(ms: i64) -> Self {
        Self {
            current: Arc::new(AtomicI64::new(ms)),
        }
    }

    /// Advance the clock by the given number of milliseconds
    pub fn advance_ms(&self, ms: i64) {
        self.current.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, ms: i64) {
        self.current.store(ms, Ordering::SeqCst);
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> i64 {
        self.current.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
