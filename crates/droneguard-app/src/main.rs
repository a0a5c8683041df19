use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use droneguard_app::runner::{load_config, BatchRunner, BatchSummary};
use droneguard_sim::engine::SimConfig;

/// Command line arguments for the runner
#[derive(Parser, Debug)]
#[command(name = "droneguard")]
#[command(about = "Run drone defense episodes and report their outcomes as JSON lines")]
struct Args {
    /// JSON configuration file; fields it omits keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base random seed; run N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Number of episodes to run
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,

    /// Number of drones
    #[arg(long)]
    drones: Option<usize>,

    /// Number of enforcement agents
    #[arg(long)]
    agents: Option<usize>,

    /// Steps an episode must survive to succeed
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = resolve_config(&args)?;

    let mut out = io::stdout().lock();
    if args.print_config {
        writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        return Ok(());
    }

    info!(
        runs = args.runs,
        seed = config.seed,
        drones = config.num_drones,
        agents = config.num_enforcement_agents,
        "starting batch"
    );

    let mut summary = BatchSummary::default();
    for record in BatchRunner::new(config, args.runs) {
        let record = record.context("episode failed")?;
        summary.record(&record.outcome);
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
    }

    info!(
        runs = summary.runs,
        successes = summary.successes,
        failures = summary.failures,
        mean_steps = summary.mean_steps(),
        reformed = summary.reformed_drones,
        "batch complete"
    );
    writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Defaults, then the config file, then command line overrides.
fn resolve_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(drones) = args.drones {
        config.num_drones = drones;
    }
    if let Some(agents) = args.agents {
        config.num_enforcement_agents = agents;
    }
    if let Some(max_steps) = args.max_steps {
        config.max_steps = max_steps;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}
