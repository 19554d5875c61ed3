// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! lobby - bank floor simulation CLI

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use lobby_core::{NullJournal, RunReport, SimConfig, Simulation};

#[derive(Parser)]
#[command(
    name = "lobby",
    version,
    about = "Bank floor simulation driven by semaphores and threads"
)]
struct Cli {
    /// TOML config file; flags below override its values
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of teller threads
    #[arg(long)]
    tellers: Option<usize>,

    /// Number of customer threads
    #[arg(long)]
    customers: Option<usize>,

    /// Simultaneous tellers allowed in the safe
    #[arg(long)]
    safe_capacity: Option<usize>,

    /// Simultaneous customers allowed through the door
    #[arg(long)]
    door_capacity: Option<usize>,

    /// Seed for reproducible pacing
    #[arg(long)]
    seed: Option<u64>,

    /// Suppress the floor transcript, print only the closing summary
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    if let Some(tellers) = cli.tellers {
        config.tellers = tellers;
    }
    if let Some(customers) = cli.customers {
        config.customers = customers;
    }
    if let Some(capacity) = cli.safe_capacity {
        config.safe_capacity = capacity;
    }
    if let Some(capacity) = cli.door_capacity {
        config.door_capacity = capacity;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    debug!(?config, "resolved config");

    let safe_capacity = config.safe_capacity;
    let door_capacity = config.door_capacity;

    let mut simulation = Simulation::new(config);
    if cli.quiet {
        simulation = simulation.with_journal(Arc::new(NullJournal));
    }
    let report = simulation.run()?;

    print_summary(&report, safe_capacity, door_capacity);
    Ok(())
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config: SimConfig =
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))?;
    Ok(config)
}

fn print_summary(report: &RunReport, safe_capacity: usize, door_capacity: usize) {
    println!("Served {} customers.", report.customers_served);
    println!(
        "Peak occupancy: safe {}/{safe_capacity}, manager {}/1, door {}/{door_capacity}.",
        report.safe_high_water, report.manager_high_water, report.door_high_water
    );
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
