// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! cpo - campaign phase orchestration CLI

mod commands;
mod error;
mod output;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{next, phases, record, replay, show};
use cpo_engine::{EngineConfig, PhaseEngine};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::error::CliError;

#[derive(Parser)]
#[command(
    name = "cpo",
    version,
    about = "Campaign phase orchestration - inspect and replay campaign phases"
)]
struct Cli {
    /// Engine config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the full campaign overview
    Show(show::ShowArgs),
    /// Print the recommended next action
    Next(next::NextArgs),
    /// List phases with run timestamps and durations
    Phases(phases::PhasesArgs),
    /// Re-apply the document's execution events one at a time
    Replay(replay::ReplayArgs),
    /// Append an execution event to the document
    Record(record::RecordArgs),
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("CPO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// `--config` when given, else the user config file when present, else defaults
fn load_config(explicit: Option<&Path>) -> Result<EngineConfig> {
    if let Some(path) = explicit {
        return EngineConfig::load(path).map_err(|e| CliError::config_invalid(path, e).into());
    }
    let Some(dir) = dirs::config_dir() else {
        return Ok(EngineConfig::default());
    };
    let path = dir.join("cpo").join("config.toml");
    tracing::debug!(path = %path.display(), "looking for user config");
    EngineConfig::load_or_default(&path).map_err(|e| CliError::config_invalid(&path, e).into())
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let engine = PhaseEngine::new(config);

    match cli.command {
        Commands::Show(args) => show::handle(args, &engine),
        Commands::Next(args) => next::handle(args, &engine),
        Commands::Phases(args) => phases::handle(args, &engine),
        Commands::Replay(args) => replay::handle(args, &engine).await,
        Commands::Record(args) => record::handle(args),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_error) => eprint!("{}", cli_error),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}
