//! Prelude module for convenient imports
//!
//! ```rust
//! use monster_core::prelude::*;
//! ```

// Core types
pub use crate::combatant::Combatant;
pub use crate::types::{Kind, KindTag, Liveness};

// Combat
pub use crate::combat::{attack, charge, fight, AttackResult, ChargeResult, FightResult, Narration};

// Arena & scenarios
pub use crate::arena::{Arena, ArenaError};
pub use crate::config::{default_scenario, load_scenario, parse_scenario, ConfigError, ScenarioConfig};
pub use crate::runner::ScenarioRunner;
