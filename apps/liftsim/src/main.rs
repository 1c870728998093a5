//! liftsim — single-elevator simulation from the command line.
//!
//! Runs a building for a fixed number of ticks, prints the three mean wait
//! times, and optionally exports the car's position trace and every
//! passenger's timestamps as CSV for plotting.
//!
//! ```text
//! liftsim --floors 20 --iterations 500 --seed 7 --output ./out
//! liftsim --config building.toml --arrivals poisson
//! RUST_LOG=debug liftsim --floors 5 --iterations 20
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use lift_core::SimConfig;
use lift_output::{CsvWriter, SimOutputObserver};
use lift_sim::{
    ArrivalModel, NoopObserver, PoissonArrivals, Sim, SimBuilder, SimObserver, UniformArrivals,
};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ArrivalKind {
    /// Up to `max-new-people` per floor per tick, uniform destinations.
    Uniform,
    /// Exponential gaps per floor, busiest at the lobby.
    Poisson,
}

#[derive(Debug, Parser)]
#[command(name = "liftsim", about = "Run the elevator simulation.")]
struct Args {
    /// Number of floors in the building.
    #[arg(long, default_value_t = 50)]
    floors: u32,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 100)]
    iterations: u64,

    /// Most people that can appear at one floor in one tick.
    #[arg(long, default_value_t = 3)]
    max_new_people: u32,

    /// Ticks a request may wait before the car is forced to fetch it.
    #[arg(long, default_value_t = 100)]
    max_wait: u64,

    /// RNG seed; drawn from entropy and logged when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Passenger arrival model.
    #[arg(long, value_enum, default_value_t = ArrivalKind::Uniform)]
    arrivals: ArrivalKind,

    /// TOML file with the simulation settings; replaces the numeric flags.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for `positions.csv` and `trips.csv`.
    #[arg(long)]
    output: Option<PathBuf>,
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn load_config_file(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
}

/// Settings from `--config` if given, otherwise from the flags.  An explicit
/// `--seed` wins over the file's seed.
fn resolve_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => SimConfig {
            floors:                  args.floors,
            iterations:              args.iterations,
            max_new_people_per_tick: args.max_new_people,
            max_wait_threshold:      args.max_wait,
            seed:                    None,
        },
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn arrival_model(kind: ArrivalKind, config: &SimConfig) -> Result<Box<dyn ArrivalModel>> {
    Ok(match kind {
        ArrivalKind::Uniform => Box::new(UniformArrivals::from_config(config)),
        ArrivalKind::Poisson => Box::new(
            PoissonArrivals::from_config(config).context("invalid simulation settings")?,
        ),
    })
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn run<O: SimObserver>(sim: &mut Sim<Box<dyn ArrivalModel>>, observer: &mut O) -> Result<()> {
    sim.run(observer).context("simulation aborted")
}

/// Run with CSV export into `dir`.  If the run or a write fails, the partial
/// files are removed before the error is returned.
fn run_with_csv(sim: &mut Sim<Box<dyn ArrivalModel>>, dir: &Path) -> Result<()> {
    let writer = CsvWriter::new(dir)
        .with_context(|| format!("creating output files in {}", dir.display()))?;
    let mut observer = SimOutputObserver::new(writer);
    let result = run(sim, &mut observer).and_then(|()| match observer.take_error() {
        Some(e) => Err(e).context("writing CSV output"),
        None => Ok(()),
    });
    if result.is_err() {
        if let Err(e) = observer.into_writer().discard() {
            warn!("could not remove partial output in {}: {e}", dir.display());
        }
    }
    result
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    let arrivals = arrival_model(args.arrivals, &config)?;
    let mut sim = SimBuilder::new(config, arrivals)
        .build()
        .context("invalid simulation settings")?;

    match &args.output {
        Some(dir) => {
            run_with_csv(&mut sim, dir)?;
            info!("wrote positions.csv and trips.csv to {}", dir.display());
        }
        None => run(&mut sim, &mut NoopObserver)?,
    }

    let summary = sim.stats().summary();
    info!(
        "{} passengers delivered, longest pickup wait {}",
        summary.delivered,
        summary
            .max_waiting_for_elevator
            .map_or_else(|| "n/a".to_string(), |w| format!("{w} ticks"))
    );
    println!("{summary}");
    Ok(())
}
