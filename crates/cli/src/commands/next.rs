// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cpo next`

use super::DocArgs;
use crate::output::{self, OutputFormat};
use crate::view::NextView;
use clap::Args;
use cpo_engine::PhaseEngine;

#[derive(Args)]
pub struct NextArgs {
    #[command(flatten)]
    pub doc: DocArgs,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn handle(args: NextArgs, engine: &PhaseEngine) -> anyhow::Result<()> {
    let doc = args.doc.load()?;
    let (store, _rejected) = doc.build_store();
    let action = engine.next_user_action(store.sources(), &doc.campaign_id);
    output::print(&NextView(&action), args.format)
}
