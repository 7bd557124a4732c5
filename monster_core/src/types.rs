//! Core types shared across the combat system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Temperature every fire combatant starts with
pub const FIRE_START_TEMPERATURE: i64 = 32;
/// Water added to the bladder per charge
pub const BLADDER_FILL_PER_CHARGE: u32 = 2;
/// Bladder level above which a charge spills everything
pub const BLADDER_CAPACITY: u32 = 5;

/// Kind of a combatant, carrying the kind-specific state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Kind {
    #[default]
    Base,
    Fire {
        /// Doubles on every charge, never resets
        temperature: i64,
    },
    Water {
        /// Number of strikes the next attack will make
        bladder: u32,
    },
}

impl Kind {
    /// Fresh fire state
    pub fn fire() -> Self {
        Kind::Fire {
            temperature: FIRE_START_TEMPERATURE,
        }
    }

    /// Fresh (empty) water state
    pub fn water() -> Self {
        Kind::Water { bladder: 0 }
    }

    /// The payload-free classification
    pub fn tag(&self) -> KindTag {
        match self {
            Kind::Base => KindTag::Base,
            Kind::Fire { .. } => KindTag::Fire,
            Kind::Water { .. } => KindTag::Water,
        }
    }
}

/// Classification of a combatant without its state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindTag {
    #[default]
    Base,
    Fire,
    Water,
}

impl KindTag {
    /// Get all kinds
    pub fn all() -> &'static [KindTag] {
        &[KindTag::Base, KindTag::Fire, KindTag::Water]
    }

    /// Prefix applied to the name of a freshly created combatant
    pub fn name_prefix(&self) -> &'static str {
        match self {
            KindTag::Base => "",
            KindTag::Fire => "Fiery-",
            KindTag::Water => "Watery-",
        }
    }

    /// Hit points a freshly created combatant starts with
    pub fn default_hit_points(&self) -> i32 {
        match self {
            KindTag::Base => 10,
            KindTag::Fire => 15,
            KindTag::Water => 20,
        }
    }

    /// Initial kind state for this classification
    pub fn initial_kind(&self) -> Kind {
        match self {
            KindTag::Base => Kind::Base,
            KindTag::Fire => Kind::fire(),
            KindTag::Water => Kind::water(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            KindTag::Base => "Base",
            KindTag::Fire => "Fire",
            KindTag::Water => "Water",
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Observable life state of a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Liveness {
    Alive,
    Defeated,
}

impl Liveness {
    pub fn from_hit_points(hit_points: i32) -> Self {
        if hit_points > 0 {
            Liveness::Alive
        } else {
            Liveness::Defeated
        }
    }
}
