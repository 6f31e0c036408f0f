// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Integration tests for notification-driven re-querying
//!
//! A subscriber re-runs engine queries whenever the store publishes a change.

use cpo_core::PhaseKey::{Analysis, Discovery, Extraction, Validation};
use cpo_core::{CampaignId, EventPattern, FakeClock, StatusRecord, Subscription};
use cpo_engine::{NextAction, PhaseEngine};
use cpo_storage::CampaignStore;
use std::sync::Arc;

fn cid() -> CampaignId {
    CampaignId::from("c-1")
}

fn configure_all(store: &mut CampaignStore) {
    for phase in [Discovery, Validation, Extraction, Analysis] {
        store.set_status(&cid(), phase, StatusRecord::with_status("configured"));
    }
}

// =============================================================================
// Full sequence walk-through
// =============================================================================

#[tokio::test]
async fn full_sequence_advances_with_each_event() {
    let mut store = CampaignStore::new();
    let mut rx = store.subscribe(
        Subscription::new("console", vec![EventPattern::new("**")], "console refresh")
            .for_campaign(cid()),
    );
    let engine = PhaseEngine::default();
    let clock = FakeClock::at(10_000);

    store.set_full_sequence_mode(&cid(), true);
    configure_all(&mut store);

    let mut seen = 0;
    while rx.try_recv().is_ok() {
        seen += 1;
    }
    assert_eq!(seen, 5);
    assert_eq!(
        engine.next_user_action(store.sources(), &cid()),
        NextAction::Start { phase: Discovery }
    );

    store.start_phase(&cid(), Discovery, &clock).unwrap();
    store.set_status(&cid(), Discovery, StatusRecord::with_status("running"));
    let event = rx.recv().await.unwrap();
    assert_eq!(event.name(), "phase:started");
    assert_eq!(
        engine.next_user_action(store.sources(), &cid()),
        NextAction::Watch { phase: Discovery }
    );

    clock.advance_ms(1_200);
    store.complete_phase(&cid(), Discovery, &clock).unwrap();
    store.set_status(&cid(), Discovery, StatusRecord::with_status("completed"));
    let overview = engine.overview(store.sources(), &cid());
    assert_eq!(overview.phases_enriched[0].duration_ms, Some(1_200));
    assert_eq!(*overview.next_action, NextAction::Start { phase: Validation });
    assert_eq!(overview.overall_progress.percent, 25);
}

#[tokio::test]
async fn other_campaigns_are_filtered() {
    let mut store = CampaignStore::new();
    let mut rx = store.subscribe(
        Subscription::new("console", vec![EventPattern::new("phase:*")], "phases")
            .for_campaign(cid()),
    );
    let clock = FakeClock::at(1);

    store
        .start_phase(&CampaignId::from("other"), Discovery, &clock)
        .unwrap();
    store.start_phase(&cid(), Validation, &clock).unwrap();

    let event = rx.recv().await.unwrap();
    assert_eq!(event.campaign_id(), &cid());
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn failure_then_retry_eligibility() {
    let mut store = CampaignStore::new();
    let mut rx = store.subscribe(Subscription::new(
        "failures",
        vec![EventPattern::new("phase:failed")],
        "failure alerts",
    ));
    let engine = PhaseEngine::default();
    let clock = FakeClock::at(500);
    configure_all(&mut store);

    store.start_phase(&cid(), Discovery, &clock).unwrap();
    clock.advance_ms(50);
    store
        .fail_phase(&cid(), Discovery, Some("dns timeout".to_string()), &clock)
        .unwrap();
    store.set_status(
        &cid(),
        Discovery,
        StatusRecord {
            last_error: Some("dns timeout".to_string()),
            ..StatusRecord::with_status("failed")
        },
    );
    store.set_last_failed_phase(&cid(), Some(Discovery));

    let event = rx.recv().await.unwrap();
    assert_eq!(event.name(), "phase:failed");

    let s = store.sources();
    assert_eq!(engine.retry_eligible_phases(s, &cid()), vec![Discovery]);
    assert_eq!(engine.last_failed_phase(s, &cid()), Some(Discovery));
    assert_eq!(
        engine.next_user_action(s, &cid()),
        NextAction::Start { phase: Validation }
    );
    let overview = engine.overview(s, &cid());
    assert_eq!(overview.phases[0].last_error.as_deref(), Some("dns timeout"));
    assert_eq!(overview.phases_enriched[0].duration_ms, Some(50));
}

#[test]
fn shared_engine_across_threads() {
    let store = {
        let mut store = CampaignStore::new();
        configure_all(&mut store);
        store
    };
    let engine = Arc::new(PhaseEngine::default());

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let engine = Arc::clone(&engine);
            let store = &store;
            scope.spawn(move || {
                let action = engine.next_user_action(store.sources(), &cid());
                assert_eq!(action, NextAction::Start { phase: Discovery });
            });
        }
    });
    assert_eq!(engine.selectors().len(), 4);
}
