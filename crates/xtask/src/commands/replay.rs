//! Replay an action script against a snapshot.
//!
//! Each step is executed with the engine exactly as a server would: accepted
//! actions advance the snapshot, rejected ones leave it unchanged.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use farm_content::{ActionLoader, SnapshotLoader};
use farm_core::{GameEngine, GameError, GameState};

use crate::utils;

/// Replay an action script against a snapshot
#[derive(Parser)]
pub struct Replay {
    /// Snapshot to start from (`.json` or `.ron`)
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,

    /// Script of actions to apply (JSON array of steps)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Rules file (TOML); built-in rules when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the final snapshot to this file as JSON
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Abort at the first rejected action
    #[arg(long)]
    strict: bool,
}

/// Counts of what happened during a replay.
#[derive(Debug, Default, PartialEq, Eq)]
struct ReplaySummary {
    applied: usize,
    rejected: usize,
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let engine = GameEngine::new(utils::load_config(self.config.as_deref())?);
        let state = SnapshotLoader::load(&self.snapshot)?;
        let script = ActionLoader::load_script(&self.script)?;

        println!(
            "{} {} ({} steps)",
            style("Replaying:").bold().cyan(),
            self.script.display(),
            script.len()
        );
        tracing::debug!(digest = %digest_hex(&state)?, "initial snapshot");

        let (state, summary) = replay(&engine, state, &script, self.strict)?;

        println!();
        println!(
            "{} {} applied, {} rejected",
            style("Summary:").bold().green(),
            summary.applied,
            summary.rejected
        );
        println!("{} {}", style("Digest:").bold().cyan(), digest_hex(&state)?);

        if let Some(out) = &self.out {
            SnapshotLoader::save(&state, out)?;
            println!("{} {}", style("Written:").bold().cyan(), out.display());
        }

        Ok(())
    }
}

fn replay(
    engine: &GameEngine,
    mut state: GameState,
    script: &farm_content::ActionScript,
    strict: bool,
) -> Result<(GameState, ReplaySummary)> {
    let mut summary = ReplaySummary::default();

    for (index, step) in script.iter().enumerate() {
        let kind = step.action.kind();
        match engine.execute(&state, &step.action, step.created_at) {
            Ok(next) => {
                state = next;
                summary.applied += 1;
                tracing::info!(step = index, action = %kind, "applied");
                println!("  {} step {index} {kind}", style("✓").green());
            }
            Err(error) => {
                summary.rejected += 1;
                tracing::warn!(
                    step = index,
                    action = %kind,
                    phase = error.phase().as_str(),
                    code = error.error_code(),
                    "rejected: {}",
                    error.error()
                );
                println!(
                    "  {} step {index} {kind}: {}",
                    style("✗").red(),
                    error.error()
                );
                if strict {
                    return Err(error).with_context(|| format!("script step {index}"));
                }
            }
        }
        tracing::debug!(step = index, digest = %digest_hex(&state)?, "snapshot");
    }

    Ok((state, summary))
}

fn digest_hex(state: &GameState) -> Result<String> {
    let digest = state.digest().context("Failed to compute snapshot digest")?;
    Ok(hex::encode(digest))
}
