//! Scenario runner - Step a scenario's rounds through an arena

use crate::arena::{Arena, ArenaError};
use crate::combat::FightResult;
use crate::config::{ConfigError, RoundConfig, ScenarioConfig};
use tracing::info;

/// Plays a scenario one round at a time
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    scenario: ScenarioConfig,
    arena: Arena,
    next_round: usize,
}

impl ScenarioRunner {
    /// Validate the scenario and set up its arena
    pub fn new(scenario: ScenarioConfig) -> Result<Self, ConfigError> {
        let arena = scenario.build_arena()?;
        info!(
            target: "monster_core.arena",
            scenario = scenario.title(),
            monsters = arena.len(),
            rounds = scenario.rounds.len(),
            "scenario loaded"
        );
        Ok(ScenarioRunner {
            scenario,
            arena,
            next_round: 0,
        })
    }

    pub fn scenario(&self) -> &ScenarioConfig {
        &self.scenario
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Number of rounds already played
    pub fn rounds_played(&self) -> usize {
        self.next_round
    }

    pub fn total_rounds(&self) -> usize {
        self.scenario.rounds.len()
    }

    pub fn is_finished(&self) -> bool {
        self.next_round >= self.total_rounds()
    }

    /// The round the next `step` will play
    pub fn upcoming(&self) -> Option<&RoundConfig> {
        self.scenario.rounds.get(self.next_round)
    }

    /// Play the next round. Returns `None` once the script is exhausted.
    pub fn step(&mut self) -> Result<Option<FightResult>, ArenaError> {
        let Some(round) = self.scenario.rounds.get(self.next_round) else {
            return Ok(None);
        };

        let result = self.arena.fight(&round.actor, round.enemies.as_slice())?;
        self.next_round += 1;
        Ok(Some(result))
    }

    /// Play every remaining round
    pub fn run_to_end(&mut self) -> Result<Vec<FightResult>, ArenaError> {
        let mut results = Vec::new();
        while let Some(result) = self.step()? {
            results.push(result);
        }
        Ok(results)
    }

    /// Back to round one with the starting roster
    pub fn reset(&mut self) {
        self.arena.reset();
        self.next_round = 0;
    }
}
