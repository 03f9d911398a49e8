//! outbreak: runs one epidemic to completion and appends it to the run log.
//!
//! ```text
//! outbreak [CONFIG.toml]
//! ```
//!
//! Without an argument the built-in defaults are used (70 agents on a 30×30
//! grid).  Set `RUST_LOG=debug` to see every infection, death and wall.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use epi_core::{AgentId, Round};
use epi_output::{CsvRunLog, RunRecordRow, SimOutputObserver};
use epi_sim::{SimBuilder, SimConfig, SimObserver};
use epi_world::Grid;

// ── Progress observer ─────────────────────────────────────────────────────────

/// Forwards to the output observer and prints a census line every
/// `every` rounds.
struct Progress<O: SimObserver> {
    inner: O,
    every: u64,
}

impl<O: SimObserver> SimObserver for Progress<O> {
    fn on_round_start(&mut self, round: Round) {
        self.inner.on_round_start(round);
    }

    fn on_agent_removed(&mut self, round: Round, agent: AgentId) {
        self.inner.on_agent_removed(round, agent);
    }

    fn on_round_end(&mut self, round: Round, grid: &Grid) {
        if round.0 % self.every == 0 {
            let c = grid.census();
            println!(
                "{round:>6}  susceptible {:>3}  infected {:>3}  sick {:>3}  recovered {:>3}  dead {:>3}  walls {:>3}",
                c.susceptible, c.infected, c.sick, c.recovered, c.dead, grid.wall_count()
            );
        }
        self.inner.on_round_end(round, grid);
    }

    fn on_sim_end(&mut self, rounds: Round, grid: &Grid) {
        self.inner.on_sim_end(rounds, grid);
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

fn pct(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

fn print_report(record: &RunRecordRow) {
    println!();
    println!("=== Run {} ===", record.turn);
    println!("{:<18} {:>6} {:>8}", "", "count", "rate");
    println!("{}", "-".repeat(34));
    for (label, count, rate) in [
        ("dead",        record.dead,       record.mortality_rate),
        ("infected",    record.infected,   record.infection_rate),
        ("recovered",   record.recovered,  record.recovery_rate),
        ("vaccinated",  record.vaccinated, record.vaccination_rate),
        ("cured",       record.cured,      record.cured_rate),
    ] {
        println!("{label:<18} {count:>6} {:>8}", pct(rate));
    }
    println!("{:<18} {:>6}", "population", record.total_population);

    println!();
    println!("{:<18} male {}  female {}", "gender", record.male, record.female);
    println!("{:<18} yes {}  no {}", "smoker", record.smoker, record.non_smoker);
    println!("{:<18} yes {}  no {}", "pre-existing", record.pre_existing, record.no_pre_existing);
    println!(
        "{:<18} active {}  sedentary {}  moderate {}",
        "lifestyle", record.active, record.sedentary, record.moderate
    );
}

// ── Run ───────────────────────────────────────────────────────────────────────

struct Outcome {
    rounds:  Round,
    elapsed: Duration,
    settled: bool,
    record:  RunRecordRow,
}

/// Build the population, run it to completion and append the run record.
/// Fails if any output write failed along the way.
fn run_outbreak(config: &SimConfig) -> Result<Outcome> {
    let mut sim = SimBuilder::new(config.clone()).build()?;

    let log = CsvRunLog::new(&config.output.directory, &config.output.run_log)?;
    let inner = SimOutputObserver::new(log, config.output.round_summaries)?;
    let every = (config.world.max_rounds / 20).max(1);
    let mut obs = Progress { inner, every };

    let t0 = Instant::now();
    let rounds = sim.run(&mut obs);
    let elapsed = t0.elapsed();
    info!(rounds = rounds.0, secs = elapsed.as_secs_f64(), "done");

    if let Some(e) = obs.inner.take_error() {
        return Err(e).context("writing run output");
    }

    let grid = sim.grid();
    let population = u32::try_from(grid.agent_count()).unwrap_or(u32::MAX);
    let record = RunRecordRow::from_stats(obs.inner.turn(), grid.stats(), population);
    Ok(Outcome { rounds, elapsed, settled: sim.is_settled(), record })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    // 1. Config.
    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::from_path(&path).with_context(|| format!("loading {path}"))?,
        None => SimConfig::default(),
    };
    println!("=== outbreak ===");
    println!(
        "Grid: {}×{}  |  Agents: {}  |  Seed: {}  |  Max rounds: {}",
        config.world.width,
        config.world.height,
        config.population.total(),
        config.world.seed,
        config.world.max_rounds,
    );
    println!();

    // 2. Build, run, record.
    let outcome = run_outbreak(&config)?;

    // 5. Report.
    println!();
    println!(
        "Finished after {} rounds in {:.3} s ({})",
        outcome.rounds.0,
        outcome.elapsed.as_secs_f64(),
        if outcome.settled { "outbreak over" } else { "round limit reached" }
    );
    print_report(&outcome.record);
    println!();
    println!("Appended to {}", config.run_log_path().display());

    Ok(())
}
