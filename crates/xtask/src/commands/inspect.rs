//! Inspect a farm snapshot.
//!
//! Shows what a player would see at a given instant: inventory, avatar
//! progress, collectible construction and which nodes are ready.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use farm_content::SnapshotLoader;
use farm_core::state::experience_for_level;
use farm_core::{
    GameConfig, GameState, Quantity, ResourceNodeKind, Timestamp, can_harvest, food_experience_boost,
    is_collectible_built,
};

use crate::utils;

/// Inspect a farm snapshot
#[derive(Parser)]
pub struct Inspect {
    /// Snapshot to inspect (`.json` or `.ron`)
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,

    /// Reference time in epoch milliseconds (defaults to now)
    #[arg(long, value_name = "MILLIS")]
    at: Option<u64>,

    /// Rules file (TOML); built-in rules when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Summary view (inventory, avatar, nodes)
    Summary,
    /// Full JSON output
    Json,
}

impl Inspect {
    pub fn execute(self) -> Result<()> {
        let config = utils::load_config(self.config.as_deref())?;
        let state = SnapshotLoader::load(&self.snapshot)?;
        let now = self.at.map(Timestamp::from_millis).unwrap_or_else(Timestamp::now);

        println!(
            "{} {}",
            style("Snapshot:").bold().cyan(),
            self.snapshot.display()
        );
        println!("{} {}", style("At:").bold().cyan(), now);
        println!();

        match self.format {
            OutputFormat::Summary => print_summary(&state, &config, now),
            OutputFormat::Json => print_json(&state)?,
        }

        Ok(())
    }
}

fn print_summary(state: &GameState, config: &GameConfig, now: Timestamp) {
    println!("{}", style("=== Farm Summary ===").bold().green());
    println!();

    println!("{}", style("Wallet:").bold().yellow());
    println!("  Coins: {}", state.coins);
    println!();

    println!("{}", style("Inventory:").bold().yellow());
    if state.inventory.is_empty() {
        println!("  (empty)");
    }
    for (item, amount) in state.inventory.iter() {
        println!("  {item}: {amount}");
    }
    println!();

    println!("{}", style("Bumpkin:").bold().yellow());
    match &state.bumpkin {
        Some(bumpkin) => {
            let level = bumpkin.level();
            print!("  Level {level} ({} XP", bumpkin.experience);
            match experience_for_level(level + 1) {
                Some(next) => println!(", next level at {next})"),
                None => println!(", max level)"),
            }
            let boost = food_experience_boost(&state.collectibles, state.buds.as_ref(), now);
            println!("  Food XP boost: +{}%", Quantity::from_decimal(boost) * 100);
            for (activity, count) in &bumpkin.activity {
                println!("  {activity}: {count}");
            }
        }
        None => println!("  (none)"),
    }
    println!();

    if !state.collectibles.is_empty() {
        println!("{}", style("Collectibles:").bold().yellow());
        for (name, placements) in &state.collectibles {
            for placement in placements {
                let status = if is_collectible_built(placement, now) {
                    style("built".to_string()).green()
                } else {
                    let left = placement.ready_at.since(now);
                    style(format!("ready in {}", utils::format_duration(left))).yellow()
                };
                println!(
                    "  {name} #{} at ({}, {}): {status}",
                    placement.id, placement.coordinates.x, placement.coordinates.y
                );
            }
        }
        println!();
    }

    for kind in ResourceNodeKind::ALL {
        let nodes = state.nodes(kind);
        if nodes.is_empty() {
            continue;
        }
        let recovery = config.node_rules(kind).recovery;
        println!(
            "{} (tool: {}, held: {})",
            style(format!("{kind:?} nodes:")).bold().yellow(),
            kind.tool(),
            state.inventory.get(kind.tool())
        );
        for (index, node) in nodes {
            let status = match node.stock.harvested_at {
                Some(harvested_at) if !can_harvest(&node.stock, recovery, now) => style(format!(
                    "recovering, {} left",
                    utils::format_duration(harvested_at.saturating_add(recovery).since(now))
                ))
                .yellow(),
                _ => style("ready".to_string()).green(),
            };
            println!(
                "  [{index}] {} {}: {status}",
                node.stock.amount,
                kind.output()
            );
        }
        println!();
    }
}

fn print_json(state: &GameState) -> Result<()> {
    let json = serde_json::to_string_pretty(state).context("Failed to serialize state to JSON")?;
    println!("{}", json);
    Ok(())
}
