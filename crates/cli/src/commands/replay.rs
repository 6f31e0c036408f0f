// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cpo replay`
//!
//! Seeds a fresh store from the document's statuses and UI state, then feeds
//! the execution events back one at a time. Each line is printed from the bus
//! notification the store publishes for that event.

use super::DocArgs;
use crate::view::format_duration;
use clap::Args;
use cpo_core::{EventPattern, ExecRuntimeEntry, RunStatus, Subscription};
use cpo_engine::PhaseEngine;
use cpo_storage::CampaignStore;

#[derive(Args)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub doc: DocArgs,
}

fn describe_run(run: Option<&ExecRuntimeEntry>) -> String {
    let Some(run) = run else {
        return "-".to_string();
    };
    let verb = match run.status {
        Some(RunStatus::Running) => return "running".to_string(),
        Some(RunStatus::Completed) => "completed",
        Some(RunStatus::Failed) => "failed",
        None => return "-".to_string(),
    };
    let mut text = match run.duration_ms() {
        Some(ms) => format!("{} in {}", verb, format_duration(ms)),
        None => verb.to_string(),
    };
    if let Some(error) = &run.error {
        text.push_str(&format!(": {}", error));
    }
    text
}

pub async fn handle(args: ReplayArgs, engine: &PhaseEngine) -> anyhow::Result<()> {
    let doc = args.doc.load()?;
    let campaign = doc.campaign_id.clone();

    let mut store = CampaignStore::new();
    doc.seed(&mut store);
    let mut rx = store.subscribe(
        Subscription::new(
            "replay",
            vec![EventPattern::new("phase:*")],
            "replayed execution events",
        )
        .for_campaign(campaign.clone()),
    );

    println!("replaying {} event(s) for {}", doc.own_events().count(), campaign);
    for (i, event) in doc.own_events().enumerate() {
        if let Err(e) = store.record(event) {
            println!("{:>3}. rejected: {}", i + 1, e);
            continue;
        }
        let Some(notified) = rx.recv().await else {
            break;
        };

        let runtime = engine.exec_runtime(store.sources(), &campaign);
        let outcome = describe_run(runtime.get(event.phase()));
        println!(
            "{:>3}. {:<16} {:<11} ts={} -> {}",
            i + 1,
            notified.name(),
            event.phase(),
            event.ts(),
            outcome
        );
    }

    let action = engine.next_user_action(store.sources(), &campaign);
    println!("next: {}", action);
    Ok(())
}
