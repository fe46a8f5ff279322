//! Print the rules the engine would run with.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;

use farm_content::ConfigLoader;
use farm_core::{GameConfig, ResourceNodeKind};

use crate::utils;

/// Print the effective game rules
#[derive(Parser)]
pub struct Rules {
    /// Rules file (TOML); built-in rules when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print as TOML instead of a table
    #[arg(long)]
    toml: bool,
}

impl Rules {
    pub fn execute(self) -> Result<()> {
        let config = utils::load_config(self.config.as_deref())?;

        if self.toml {
            print!("{}", ConfigLoader::to_toml(&config)?);
        } else {
            print_table(&config);
        }

        Ok(())
    }
}

fn print_table(config: &GameConfig) {
    println!("{}", style("Resource nodes:").bold().yellow());
    for kind in ResourceNodeKind::ALL {
        let rules = config.node_rules(kind);
        println!(
            "  {:<6} tool {:<14} recovery {:<12} regen {:<3} boosted wait {}",
            format!("{kind:?}"),
            kind.tool().as_str(),
            utils::format_duration(rules.recovery),
            rules.regenerated_amount.to_string(),
            utils::format_duration(rules.boosted_recovery()),
        );
    }
    println!();

    println!("{}", style("Build durations:").bold().yellow());
    if config.build_durations.is_empty() {
        println!("  (all collectibles build instantly)");
    }
    for (name, duration) in &config.build_durations {
        println!("  {name}: {}", utils::format_duration(*duration));
    }
}
