// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod next;
pub mod phases;
pub mod record;
pub mod replay;
pub mod show;

use crate::error::CliError;
use clap::Args;
use cpo_storage::CampaignDocument;
use std::path::PathBuf;

/// Campaign document selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct DocArgs {
    /// Campaign document (JSON)
    pub doc: PathBuf,

    /// Campaign id; must match the document's campaign
    #[arg(long)]
    pub campaign: Option<String>,
}

impl DocArgs {
    pub fn load(&self) -> Result<CampaignDocument, CliError> {
        let doc = CampaignDocument::load(&self.doc)
            .map_err(|e| CliError::document_unreadable(&self.doc, e))?;
        if let Some(requested) = &self.campaign {
            if requested != doc.campaign_id.as_str() {
                return Err(CliError::campaign_not_found(
                    requested,
                    &self.doc,
                    &doc.campaign_id,
                ));
            }
        }
        Ok(doc)
    }
}
