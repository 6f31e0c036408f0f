// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cpo record`

use super::DocArgs;
use crate::error::CliError;
use clap::{Args, ValueEnum};
use cpo_core::{Clock, ExecutionEvent, PhaseKey, SystemClock};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Outcome {
    Start,
    Complete,
    Fail,
}

#[derive(Args)]
pub struct RecordArgs {
    #[command(flatten)]
    pub doc: DocArgs,

    /// Phase the event applies to
    pub phase: PhaseKey,

    #[arg(value_enum)]
    pub outcome: Outcome,

    /// Failure message (fail only)
    #[arg(long)]
    pub error: Option<String>,

    /// Event time in epoch milliseconds; defaults to now
    #[arg(long)]
    pub ts: Option<i64>,
}

pub fn handle(args: RecordArgs) -> anyhow::Result<()> {
    let mut doc = args.doc.load()?;
    let campaign_id = doc.campaign_id.clone();
    let ts = args.ts.unwrap_or_else(|| SystemClock.now_ms());
    let phase = args.phase;

    let event = match args.outcome {
        Outcome::Start => ExecutionEvent::PhaseStarted {
            campaign_id,
            phase,
            ts,
        },
        Outcome::Complete => ExecutionEvent::PhaseCompleted {
            campaign_id,
            phase,
            ts,
        },
        Outcome::Fail => ExecutionEvent::PhaseFailed {
            campaign_id,
            phase,
            ts,
            error: args.error,
        },
    };

    // Validate against the runs already in the document
    let (mut store, _rejected) = doc.build_store();
    store
        .record(&event)
        .map_err(|e| CliError::event_rejected(&args.doc.doc, e))?;

    let name = event.name();
    doc.events.push(event);
    doc.save(&args.doc.doc)?;
    println!("Recorded {} for {} at {}", name, phase, ts);
    Ok(())
}
