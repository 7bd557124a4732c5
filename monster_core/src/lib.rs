//! monster_core - Turn-based monster combat
//!
//! This library provides:
//! - Combatant: a monster of a given Kind (Base, Fire, Water)
//! - Combat: charge, attack and fight, returning structured narration
//! - Arena: named roster running scripted fights
//! - Scenario: TOML roster + round script, stepped by ScenarioRunner

pub mod arena;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod prelude;
pub mod runner;
pub mod types;

// Re-export core types for convenience
pub use arena::{Arena, ArenaError};
pub use combat::{attack, charge, fight, AttackResult, ChargeResult, FightResult, Narration};
pub use combatant::Combatant;
pub use config::{default_scenario, ConfigError, ScenarioConfig};
pub use runner::ScenarioRunner;
pub use types::{Kind, KindTag, Liveness};
