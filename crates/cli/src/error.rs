// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.

use cpo_core::CampaignId;
use cpo_engine::ConfigError;
use cpo_storage::{ApplyError, StorageError};
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures the CLI reports
impl CliError {
    pub fn document_unreadable(path: &Path, err: StorageError) -> Self {
        let suggestion = match &err {
            StorageError::Read { .. } => "Check that the file exists and is readable".to_string(),
            StorageError::Parse { .. } => {
                "Phase keys must be discovery, validation, extraction or analysis".to_string()
            }
            StorageError::Encode { .. } | StorageError::Write { .. } => {
                format!("Check permissions for {}", path.display())
            }
        };
        CliError::new(format!("Cannot load campaign document '{}'", path.display()))
            .with_context(err.to_string())
            .with_suggestion(suggestion)
            .with_source(err)
    }

    pub fn campaign_not_found(requested: &str, path: &Path, found: &CampaignId) -> Self {
        CliError::new(format!(
            "Campaign '{}' not found in '{}'",
            requested,
            path.display()
        ))
        .with_context(format!("The document holds campaign '{}'", found))
        .with_suggestion(format!("Use --campaign {}", found))
        .with_suggestion("Omit --campaign to use the document's campaign")
    }

    pub fn config_invalid(path: &Path, err: ConfigError) -> Self {
        CliError::new(format!("Cannot load config '{}'", path.display()))
            .with_context(err.to_string())
            .with_suggestion("Known keys: status_endpoint, [labels] full_sequence, step_by_step")
            .with_source(err)
    }

    pub fn event_rejected(path: &Path, err: ApplyError) -> Self {
        CliError::new("Execution event rejected")
            .with_context(err.to_string())
            .with_suggestion(format!(
                "Inspect the current runs: cpo phases {}",
                path.display()
            ))
            .with_source(err)
    }
}
