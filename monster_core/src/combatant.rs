//! Combatant - A single monster taking part in a fight

use crate::types::{Kind, KindTag, Liveness};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hit points restored by a single heal
pub const HEAL_AMOUNT: i32 = 1;

/// Complete combat state for one monster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    /// Display name, fixed at creation (kind prefix already applied)
    pub name: String,
    /// Current hit points; not floored at zero
    pub hit_points: i32,
    /// Base damage per strike
    pub attack_power: i32,
    /// Kind and kind-specific state
    #[serde(default)]
    pub kind: Kind,
}

impl Combatant {
    /// Create a combatant with an explicit name, power and kind state.
    ///
    /// Hit points start at the kind's default and no name prefix is applied.
    pub fn new(name: impl Into<String>, attack_power: i32, kind: Kind) -> Self {
        Combatant {
            name: name.into(),
            hit_points: kind.tag().default_hit_points(),
            attack_power,
            kind,
        }
    }

    /// Create a fresh combatant of the given kind, applying the kind's name prefix
    pub fn of_kind(tag: KindTag, name: &str, attack_power: i32) -> Self {
        Self::new(
            format!("{}{}", tag.name_prefix(), name),
            attack_power,
            tag.initial_kind(),
        )
    }

    /// Plain monster: 10 hit points, no special behaviour
    pub fn base(name: &str, attack_power: i32) -> Self {
        Self::of_kind(KindTag::Base, name, attack_power)
    }

    /// Fire monster: "Fiery-" prefix, 15 hit points, temperature 32
    pub fn fire(name: &str, fire_power: i32) -> Self {
        Self::of_kind(KindTag::Fire, name, fire_power)
    }

    /// Water monster: "Watery-" prefix, 20 hit points, empty bladder
    pub fn water(name: &str, water_power: i32) -> Self {
        Self::of_kind(KindTag::Water, name, water_power)
    }

    /// Override the starting hit points
    pub fn with_hit_points(mut self, hit_points: i32) -> Self {
        self.hit_points = hit_points;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    pub fn liveness(&self) -> Liveness {
        Liveness::from_hit_points(self.hit_points)
    }

    pub fn kind_tag(&self) -> KindTag {
        self.kind.tag()
    }

    /// Restore a single hit point
    pub fn heal(&mut self) {
        self.hit_points = self.hit_points.saturating_add(HEAL_AMOUNT);
    }

    /// Take a hit. Returns the hit points after the hit.
    pub fn take_hit(&mut self, amount: i32) -> i32 {
        self.hit_points = self.hit_points.saturating_sub(amount);
        self.hit_points
    }

    /// Current fire temperature, if this is a fire combatant
    pub fn temperature(&self) -> Option<i64> {
        match self.kind {
            Kind::Fire { temperature } => Some(temperature),
            _ => None,
        }
    }

    /// Current water bladder level, if this is a water combatant
    pub fn bladder(&self) -> Option<u32> {
        match self.kind {
            Kind::Water { bladder } => Some(bladder),
            _ => None,
        }
    }

    /// Short description of the kind-specific state
    pub fn kind_state(&self) -> String {
        match self.kind {
            Kind::Base => "-".to_string(),
            Kind::Fire { temperature } => format!("{} degrees", temperature),
            Kind::Water { bladder } => format!("{} L water", bladder),
        }
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] hp: {}, attack: {}",
            self.name,
            self.kind_tag(),
            self.hit_points,
            self.attack_power
        )?;
        match self.kind {
            Kind::Base => Ok(()),
            Kind::Fire { temperature } => write!(f, ", temperature: {}", temperature),
            Kind::Water { bladder } => write!(f, ", bladder: {}", bladder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_defaults() {
        let base = Combatant::base("slime", 2);
        assert_eq!(base.name, "slime");
        assert_eq!(base.hit_points, 10);
        assert_eq!(base.kind, Kind::Base);

        let fire = Combatant::fire("wizzrobe", 8);
        assert_eq!(fire.name, "Fiery-wizzrobe");
        assert_eq!(fire.hit_points, 15);
        assert_eq!(fire.temperature(), Some(32));

        let water = Combatant::water("cthulhu", 3);
        assert_eq!(water.name, "Watery-cthulhu");
        assert_eq!(water.hit_points, 20);
        assert_eq!(water.bladder(), Some(0));
    }

    #[test]
    fn test_with_hit_points_override() {
        let fire = Combatant::fire("imp", 1).with_hit_points(3);
        assert_eq!(fire.hit_points, 3);
        assert_eq!(fire.temperature(), Some(32));
    }

    #[test]
    fn test_alive_tracks_hit_points() {
        let mut monster = Combatant::base("rat", 1);
        assert!(monster.is_alive());

        monster.take_hit(10);
        assert_eq!(monster.hit_points, 0);
        assert!(!monster.is_alive());
        assert_eq!(monster.liveness(), Liveness::Defeated);

        monster.take_hit(4);
        assert_eq!(monster.hit_points, -4, "hit points are never floored");
    }

    #[test]
    fn test_heal_adds_one() {
        let mut monster = Combatant::base("rat", 1).with_hit_points(-2);
        monster.heal();
        assert_eq!(monster.hit_points, -1);
    }

    #[test]
    fn test_display_includes_kind_state() {
        let water = Combatant::water("cthulhu", 3);
        let line = water.to_string();
        assert!(line.contains("Watery-cthulhu"));
        assert!(line.contains("bladder: 0"));

        let base = Combatant::base("slime", 2).to_string();
        assert_eq!(base, "slime [Base] hp: 10, attack: 2");
    }
}
