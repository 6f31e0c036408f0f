// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cpo show`

use super::DocArgs;
use crate::output::{self, OutputFormat};
use crate::view::OverviewView;
use clap::Args;
use cpo_core::Sources;
use cpo_engine::PhaseEngine;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub doc: DocArgs,

    /// Read statuses through a flat response cache instead of keyed lookups
    #[arg(long)]
    pub flat: bool,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn handle(args: ShowArgs, engine: &PhaseEngine) -> anyhow::Result<()> {
    let doc = args.doc.load()?;
    let (store, rejected) = doc.build_store();

    let cache;
    let sources = if args.flat {
        cache = doc.status_cache(&engine.config().status_endpoint);
        Sources::new(&cache, store.exec_log(), store.ui_store())
    } else {
        store.sources()
    };

    let overview = engine.overview(sources, &doc.campaign_id);
    output::print(
        &OverviewView {
            overview: &overview,
            rejected_events: rejected.len(),
        },
        args.format,
    )
}
