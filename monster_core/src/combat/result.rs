//! Combat results - Outcome of charge, attack and fight

use super::narration::Narration;
use serde::{Deserialize, Serialize};

/// Result of charging a combatant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeResult {
    /// Name of the charging combatant
    pub combatant: String,
    /// Hit points restored by the charge
    pub healed: i32,
    /// Hit points after the charge
    pub hit_points_after: i32,
    /// Narration emitted, in order
    pub narration: Vec<Narration>,
}

impl ChargeResult {
    pub fn new(combatant: impl Into<String>) -> Self {
        ChargeResult {
            combatant: combatant.into(),
            ..Default::default()
        }
    }
}

/// Result of one attacker attacking one defender
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    // === Participants ===
    pub attacker: String,
    pub defender: String,

    // === Outcome ===
    /// Whether the attacker was alive to attack at all
    pub attempted: bool,
    /// Strikes that actually landed
    pub strikes: u32,
    /// Power of each strike after kind bonuses
    pub effective_power: i32,
    /// Total hit points removed from the defender
    pub damage_dealt: i64,

    // === State Changes ===
    pub defender_hp_before: i32,
    pub defender_hp_after: i32,

    // === Flags ===
    /// Whether this attack took the defender from alive to defeated
    pub is_killing_blow: bool,

    /// Narration emitted, in order
    pub narration: Vec<Narration>,
}

impl AttackResult {
    /// Create a new empty attack result
    pub fn new(attacker: impl Into<String>, defender: impl Into<String>) -> Self {
        AttackResult {
            attacker: attacker.into(),
            defender: defender.into(),
            ..Default::default()
        }
    }

    /// Get defender life change (negative when damaged)
    pub fn life_change(&self) -> i64 {
        i64::from(self.defender_hp_after) - i64::from(self.defender_hp_before)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if !self.attempted {
            return format!("{} could not attack", self.attacker);
        }

        let mut parts = vec![format!(
            "{} hit {} for {}",
            self.attacker, self.defender, self.damage_dealt
        )];

        if self.strikes > 1 {
            parts.push(format!("{} strikes", self.strikes));
        }

        if self.is_killing_blow {
            parts.push("FATAL".to_string());
        }

        parts.join(", ")
    }
}

/// Result of a full fight: one charge followed by one attack per enemy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightResult {
    /// Name of the fighting combatant
    pub actor: String,
    pub charge: ChargeResult,
    /// One entry per enemy, in the order they were attacked
    pub attacks: Vec<AttackResult>,
}

impl FightResult {
    pub fn new(charge: ChargeResult) -> Self {
        FightResult {
            actor: charge.combatant.clone(),
            charge,
            attacks: Vec::new(),
        }
    }

    /// All narration of the fight, in emission order
    pub fn narration(&self) -> impl Iterator<Item = &Narration> {
        self.charge
            .narration
            .iter()
            .chain(self.attacks.iter().flat_map(|a| a.narration.iter()))
    }

    /// Total damage dealt across all attacks
    pub fn total_damage(&self) -> i64 {
        self.attacks.iter().map(|a| a.damage_dealt).sum()
    }

    /// Names of the enemies defeated during this fight
    pub fn defeated(&self) -> Vec<&str> {
        self.attacks
            .iter()
            .filter(|a| a.is_killing_blow)
            .map(|a| a.defender.as_str())
            .collect()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let defeated = self.defeated();
        if defeated.is_empty() {
            format!(
                "{} dealt {} damage to {} enemies",
                self.actor,
                self.total_damage(),
                self.attacks.len()
            )
        } else {
            format!(
                "{} dealt {} damage, defeating {}",
                self.actor,
                self.total_damage(),
                defeated.join(", ")
            )
        }
    }
}
