//! Monster Demo - Plays the classic fight and prints its narration
//!
//! Runs the first round of the bundled scenario (or the scenario named by
//! `MONSTER_SCENARIO`), prints each narration line, then dumps the final
//! state of every combatant.

use monster_core::config::load_scenario;
use monster_core::{default_scenario, ConfigError, ScenarioRunner};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let scenario = match std::env::var("MONSTER_SCENARIO") {
        Ok(path) => load_scenario(Path::new(&path))?,
        Err(_) => default_scenario(),
    };

    let mut runner = ScenarioRunner::new(scenario)?;
    if let Some(fight) = runner.step()? {
        for line in fight.narration() {
            println!("{}", line);
        }
        tracing::info!(summary = %fight.summary(), "fight finished");
    }

    for (_, combatant) in runner.arena().combatants() {
        println!("{}", combatant);
    }

    Ok(())
}
