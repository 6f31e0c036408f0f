// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cpo phases`

use super::DocArgs;
use crate::output::{self, OutputFormat};
use crate::view::PhaseTable;
use clap::Args;
use cpo_engine::PhaseEngine;

#[derive(Args)]
pub struct PhasesArgs {
    #[command(flatten)]
    pub doc: DocArgs,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn handle(args: PhasesArgs, engine: &PhaseEngine) -> anyhow::Result<()> {
    let doc = args.doc.load()?;
    let (store, _rejected) = doc.build_store();
    let phases = engine.phases_enriched(store.sources(), &doc.campaign_id);
    output::print(&PhaseTable(&phases), args.format)
}
