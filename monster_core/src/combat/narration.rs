//! Narration - Structured events produced by charge and attack

use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of battle narration.
///
/// Operations return these instead of printing; `Display` gives the
/// classic text for callers that just want to show them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Narration {
    ChargedUp { name: String },
    TemperatureRaised { name: String, temperature: i64 },
    BladderFilled { name: String, level: u32 },
    BladderOverflowed { name: String },
    FireTaunt { name: String, temperature: i64 },
    MultiAttack { name: String, strikes: u32 },
    Soaked { name: String },
    Attacked { attacker: String, defender: String, power: i32 },
    TooWeakToAttack { name: String },
    Died { name: String },
}

impl Narration {
    /// Name of the combatant this event is about
    pub fn subject(&self) -> &str {
        match self {
            Narration::ChargedUp { name }
            | Narration::TemperatureRaised { name, .. }
            | Narration::BladderFilled { name, .. }
            | Narration::BladderOverflowed { name }
            | Narration::FireTaunt { name, .. }
            | Narration::MultiAttack { name, .. }
            | Narration::Soaked { name }
            | Narration::TooWeakToAttack { name }
            | Narration::Died { name } => name,
            Narration::Attacked { attacker, .. } => attacker,
        }
    }

    /// Whether this event marks a defeat
    pub fn is_death(&self) -> bool {
        matches!(self, Narration::Died { .. })
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narration::ChargedUp { name } => write!(f, "{} charges up to attack", name),
            Narration::TemperatureRaised { name, temperature } => write!(
                f,
                "{} took a magma bath and increased temperature to {} degrees!",
                name, temperature
            ),
            Narration::BladderFilled { name, level } => write!(
                f,
                "{} now has their bladder filled with {} L water.",
                name, level
            ),
            Narration::BladderOverflowed { name } => write!(f, "{} took in too much water", name),
            Narration::FireTaunt { temperature, .. } => write!(
                f,
                "And now you will burn from my fire at {} degrees!",
                temperature
            ),
            Narration::MultiAttack { name, .. } => write!(
                f,
                "{} will use their bladder to attack multiple times",
                name
            ),
            Narration::Soaked { .. } => f.write_str("And now you will be soaking wet!"),
            Narration::Attacked {
                attacker,
                defender,
                power,
            } => write!(f, "{} attacks {} at level {}", attacker, defender, power),
            Narration::TooWeakToAttack { name } => {
                write!(f, "{} took too much damage to attack", name)
            }
            Narration::Died { name } => write!(f, "{} has died.", name),
        }
    }
}
