use std::cell::RefCell;
use std::error::Error;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use showdown::simulation::{
    HandLogger, JsonRoundLogger, MonteCarloSimulationBuilder, RoundLogger, SimulationSummary,
    StatsLogger,
};
use tracing::{Level, event};
use tracing_subscriber::EnvFilter;

/// Deal many random hold'em rounds to a full table and count who wins.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of rounds to play.
    #[arg(long, default_value_t = 100_000)]
    hands: u64,
    /// Number of players at the table.
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(2..=23))]
    players: u8,
    /// Seed for the deck. A random seed is used when missing.
    #[arg(long)]
    seed: Option<u64>,
    /// Write a text entry for every round to this file.
    #[arg(long, value_name = "PATH")]
    hand_log: Option<PathBuf>,
    /// Write starting hand and hand rank csv files next to this path.
    #[arg(long, value_name = "PATH")]
    stats: Option<PathBuf>,
    /// Write every round as a line of json to this file.
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let summary = simulate(&Cli::parse())?;
    print!("{summary}");
    Ok(())
}

/// Run the simulation and write every requested log file.
fn simulate(cli: &Cli) -> Result<SimulationSummary, Box<dyn Error>> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    event!(Level::INFO, seed, "seeding deck");

    let hand_log = cli
        .hand_log
        .as_ref()
        .map(|_| Rc::new(RefCell::new(HandLogger::new())));
    let stats = cli
        .stats
        .as_ref()
        .map(|_| Rc::new(RefCell::new(StatsLogger::new())));
    let json = cli
        .json
        .as_ref()
        .map(JsonRoundLogger::create)
        .transpose()?
        .map(|logger| Rc::new(RefCell::new(logger)));

    let mut loggers: Vec<Box<dyn RoundLogger>> = vec![];
    if let Some(logger) = &hand_log {
        loggers.push(Box::new(logger.clone()));
    }
    if let Some(logger) = &stats {
        loggers.push(Box::new(logger.clone()));
    }
    if let Some(logger) = &json {
        loggers.push(Box::new(logger.clone()));
    }

    let mut sim = MonteCarloSimulationBuilder::new()
        .num_hands(cli.hands)
        .num_players(usize::from(cli.players))
        .rng(StdRng::seed_from_u64(seed))
        .loggers(loggers)
        .build()?;
    let summary = sim.run()?;

    if let (Some(path), Some(logger)) = (&cli.hand_log, &hand_log) {
        logger.try_borrow()?.write_to_file(path)?;
    }
    if let (Some(path), Some(logger)) = (&cli.stats, &stats) {
        logger.try_borrow()?.write_to_files(path)?;
    }
    if let Some(logger) = &json {
        logger.try_borrow_mut()?.flush()?;
    }

    Ok(summary)
}
