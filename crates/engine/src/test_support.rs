// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixtures shared by unit tests

use crate::projector::Phases;
use cpo_core::{PhaseKey, StatusRecord, UiPipelinePhase};

/// Build a phase set from one raw status per phase; `""` means no record
pub(crate) fn phases(statuses: [&str; 4]) -> Phases {
    std::array::from_fn(|i| {
        let (key, status) = (PhaseKey::ALL[i], statuses[i]);
        if status.is_empty() {
            UiPipelinePhase::from_record(key, None)
        } else {
            UiPipelinePhase::from_record(key, Some(&StatusRecord::with_status(status)))
        }
    })
}
