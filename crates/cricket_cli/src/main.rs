//! Tournament runner.
//!
//! Wires sample rosters and ground conditions into the engine and narrates
//! the result on the console. The engine itself never prints; everything
//! visible here arrives through the event stream.

mod narrator;
mod rosters;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cricket_core::{NullSink, SimConfig, TournamentPlan, TournamentSimulator};
use narrator::ConsoleNarrator;

#[derive(Parser)]
#[command(name = "cricket_cli")]
#[command(about = "Simulate a four-team knockout cricket tournament", long_about = None)]
struct Cli {
    /// Overs per innings
    #[arg(long, default_value_t = 5)]
    overs: u32,

    /// Simulation seed; the same seed replays the same tournament
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Suppress ball-by-ball commentary
    #[arg(long, default_value_t = false)]
    quiet: bool,

    /// Print the tournament result as JSON instead of a banner
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    sensible_env_logger::init!();
    let cli = Cli::parse();

    let mut roster_rng = ChaCha8Rng::seed_from_u64(cli.seed);
    let teams = rosters::sample_teams(&mut roster_rng)?;
    let field = rosters::sample_field()?;
    let config = SimConfig { total_overs: cli.overs, ..SimConfig::default() };

    log::info!("starting tournament: seed={} overs={}", cli.seed, cli.overs);
    let plan = TournamentPlan { teams, field, config, seed: cli.seed };
    let simulator = TournamentSimulator::new(plan)?;

    if cli.json {
        let result = simulator.run(&mut NullSink)?;
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        simulator.run(&mut ConsoleNarrator::new(!cli.quiet))?;
    }
    Ok(())
}
