// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text views over engine results

use cpo_engine::{EnrichedPhase, NextAction, Overview};
use serde::Serialize;
use std::fmt;

pub fn format_duration(ms: i64) -> String {
    if ms < 1_000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1_000.0)
    } else {
        format!("{}m{:02}s", ms / 60_000, (ms % 60_000) / 1_000)
    }
}

fn write_phase_table(f: &mut fmt::Formatter<'_>, phases: &[EnrichedPhase]) -> fmt::Result {
    writeln!(
        f,
        "{:<12} {:<8} {:<10} {:<10} {}",
        "PHASE", "CONFIG", "EXEC", "STATUS", "DURATION"
    )?;
    for phase in phases {
        let raw = phase
            .phase
            .status_raw
            .as_ref()
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| "-".to_string());
        let duration = phase
            .duration_ms
            .map(format_duration)
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            f,
            "{:<12} {:<8} {:<10} {:<10} {}",
            phase.key(),
            phase.phase.config_state,
            phase.phase.exec_state,
            raw,
            duration
        )?;
    }
    Ok(())
}

fn join<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Phase table for `cpo phases`
#[derive(Serialize)]
#[serde(transparent)]
pub struct PhaseTable<'a>(pub &'a [EnrichedPhase]);

impl fmt::Display for PhaseTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_phase_table(f, self.0)
    }
}

/// Single next-action line for `cpo next`
#[derive(Serialize)]
#[serde(transparent)]
pub struct NextView<'a>(pub &'a NextAction);

impl fmt::Display for NextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0)
    }
}

/// Full overview for `cpo show`
#[derive(Serialize)]
pub struct OverviewView<'a> {
    #[serde(flatten)]
    pub overview: &'a Overview,
    pub rejected_events: usize,
}

impl fmt::Display for OverviewView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.overview;
        writeln!(f, "campaign {} ({})", o.campaign_id, o.mode.label)?;
        writeln!(f)?;
        write_phase_table(f, &o.phases_enriched[..])?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<12} {}/{} ({}%)",
            "configured", o.config_progress.configured, o.config_progress.total, o.config_progress.percent
        )?;
        writeln!(
            f,
            "{:<12} {}/{} ({}%)",
            "completed", o.overall_progress.completed, o.overall_progress.total, o.overall_progress.percent
        )?;
        if let Some(active) = o.markers.active_phase {
            writeln!(f, "{:<12} {}", "running", active)?;
        }
        if !o.failures.failed_phases.is_empty() {
            writeln!(f, "{:<12} {}", "failed", join(&o.failures.failed_phases, ", "))?;
        }
        if let Some(last) = o.failures.last_failed_phase {
            writeln!(f, "{:<12} {}", "last failed", last)?;
        }
        if !o.retry_eligible_phases.is_empty() {
            writeln!(f, "{:<12} {}", "retry", join(&o.retry_eligible_phases, ", "))?;
        }
        if let Some(latest) = &o.guidance.latest {
            writeln!(
                f,
                "{:<12} {} queued, latest [{}] {}",
                "guidance", o.guidance.count, latest.phase, latest.text
            )?;
        }
        if o.preflight.open {
            writeln!(f, "{:<12} open", "preflight")?;
        }
        if o.start.can_start {
            writeln!(f, "{:<12} ready ({})", "start", o.start_cta.label)?;
        } else {
            writeln!(f, "{:<12} blocked: {}", "start", join(&o.start.reasons, "; "))?;
        }
        writeln!(f, "{:<12} {}", "next", o.next_action)?;
        if self.rejected_events > 0 {
            writeln!(f, "{:<12} {} event(s)", "rejected", self.rejected_events)?;
        }
        Ok(())
    }
}
