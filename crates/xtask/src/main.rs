//! Development tasks for the farm engine
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Inspect, Replay, Rules};

/// Development tasks for the farm engine
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the farm engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Replay an action script against a snapshot
    Replay(Replay),

    /// Show inventory, avatar and node readiness of a snapshot
    Inspect(Inspect),

    /// Print the effective game rules
    Rules(Rules),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay(cmd) => cmd.execute(),
        Command::Inspect(cmd) => cmd.execute(),
        Command::Rules(cmd) => cmd.execute(),
    }
}
