//! Scenario configuration loading

use super::ConfigError;
use crate::arena::Arena;
use crate::combatant::Combatant;
use crate::types::KindTag;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A roster of monsters and the script of rounds they fight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Display title
    #[serde(default)]
    pub name: Option<String>,
    pub monsters: Vec<MonsterConfig>,
    #[serde(default)]
    pub rounds: Vec<RoundConfig>,
}

/// One monster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterConfig {
    /// Id used by rounds to refer to this monster
    pub id: String,
    /// Name before the kind prefix; defaults to the id
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: KindTag,
    pub attack_power: i32,
    /// Starting hit points; defaults per kind
    #[serde(default)]
    pub hit_points: Option<i32>,
}

impl MonsterConfig {
    /// Create the combatant this entry describes
    pub fn build(&self) -> Combatant {
        let name = self.name.as_deref().unwrap_or(&self.id);
        let combatant = Combatant::of_kind(self.kind, name, self.attack_power);
        match self.hit_points {
            Some(hp) => combatant.with_hit_points(hp),
            None => combatant,
        }
    }
}

/// One scripted fight: the actor charges, then attacks each enemy in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub actor: String,
    #[serde(default)]
    pub enemies: Vec<String>,
}

impl ScenarioConfig {
    /// The classic fight: wizzrobe charges, then attacks both enemies once
    pub fn classic() -> Self {
        ScenarioConfig {
            name: Some("Classic".to_string()),
            monsters: vec![
                MonsterConfig {
                    id: "wizzrobe".to_string(),
                    name: None,
                    kind: KindTag::Fire,
                    attack_power: 8,
                    hit_points: None,
                },
                MonsterConfig {
                    id: "demon_firesage".to_string(),
                    name: Some("demon firesage".to_string()),
                    kind: KindTag::Fire,
                    attack_power: 4,
                    hit_points: None,
                },
                MonsterConfig {
                    id: "cthulhu".to_string(),
                    name: None,
                    kind: KindTag::Water,
                    attack_power: 3,
                    hit_points: None,
                },
            ],
            rounds: vec![RoundConfig {
                actor: "wizzrobe".to_string(),
                enemies: vec!["demon_firesage".to_string(), "cthulhu".to_string()],
            }],
        }
    }

    /// Title to show for this scenario
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled scenario")
    }

    /// Check the roster and the script refer to each other consistently
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.monsters.is_empty() {
            return Err(ConfigError::ValidationError(
                "scenario has no monsters".to_string(),
            ));
        }

        let mut ids = HashSet::new();
        for monster in &self.monsters {
            if !ids.insert(monster.id.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate monster id '{}'",
                    monster.id
                )));
            }
        }

        for (idx, round) in self.rounds.iter().enumerate() {
            let number = idx + 1;
            if !ids.contains(round.actor.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "round {}: unknown actor '{}'",
                    number, round.actor
                )));
            }
            for enemy in &round.enemies {
                if !ids.contains(enemy.as_str()) {
                    return Err(ConfigError::ValidationError(format!(
                        "round {}: unknown enemy '{}'",
                        number, enemy
                    )));
                }
                if *enemy == round.actor {
                    return Err(ConfigError::ValidationError(format!(
                        "round {}: '{}' cannot fight itself",
                        number, enemy
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validate and populate a fresh arena with this scenario's roster
    pub fn build_arena(&self) -> Result<Arena, ConfigError> {
        self.validate()?;

        let mut arena = Arena::new();
        for monster in &self.monsters {
            arena.add(monster.id.clone(), monster.build())?;
        }
        Ok(arena)
    }
}

/// Load a scenario from a TOML file
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ConfigError> {
    let scenario: ScenarioConfig = super::load_toml(path)?;
    scenario.validate()?;
    Ok(scenario)
}

/// Load a scenario from a TOML string
pub fn parse_scenario(content: &str) -> Result<ScenarioConfig, ConfigError> {
    let scenario: ScenarioConfig = super::parse_toml(content)?;
    scenario.validate()?;
    Ok(scenario)
}

/// Get the bundled scenario
pub fn default_scenario() -> ScenarioConfig {
    scenario_or_classic(include_str!("../../config/scenario.toml"))
}

fn scenario_or_classic(content: &str) -> ScenarioConfig {
    parse_scenario(content).unwrap_or_else(|err| {
        tracing::warn!(
            target: "monster_core.config",
            error = %err,
            "bundled scenario invalid, using the classic fight"
        );
        ScenarioConfig::classic()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario() {
        let toml = r#"
name = "Duel"

[[monsters]]
id = "slime"
attack_power = 2

[[monsters]]
id = "nessie"
name = "loch ness"
kind = "water"
attack_power = 5
hit_points = 40

[[rounds]]
actor = "nessie"
enemies = ["slime", "slime"]
"#;

        let scenario = parse_scenario(toml).unwrap();
        assert_eq!(scenario.title(), "Duel");
        assert_eq!(scenario.monsters.len(), 2);
        assert_eq!(scenario.monsters[0].kind, KindTag::Base);

        let nessie = scenario.monsters[1].build();
        assert_eq!(nessie.name, "Watery-loch ness");
        assert_eq!(nessie.hit_points, 40);
        assert_eq!(nessie.bladder(), Some(0));

        assert_eq!(scenario.rounds[0].enemies, vec!["slime", "slime"]);
    }

    #[test]
    fn test_name_defaults_to_id() {
        let monster = MonsterConfig {
            id: "cthulhu".to_string(),
            name: None,
            kind: KindTag::Water,
            attack_power: 3,
            hit_points: None,
        };
        let combatant = monster.build();
        assert_eq!(combatant.name, "Watery-cthulhu");
        assert_eq!(combatant.hit_points, 20);
    }

    #[test]
    fn test_unknown_enemy_rejected() {
        let toml = r#"
[[monsters]]
id = "slime"
attack_power = 2

[[rounds]]
actor = "slime"
enemies = ["ghost"]
"#;
        let err = parse_scenario(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(ref msg) if msg.contains("ghost")));
    }

    #[test]
    fn test_self_target_rejected() {
        let mut scenario = ScenarioConfig::classic();
        scenario.rounds[0].enemies.push("wizzrobe".to_string());
        assert!(matches!(
            scenario.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut scenario = ScenarioConfig::classic();
        let copy = scenario.monsters[0].clone();
        scenario.monsters.push(copy);
        let err = scenario.build_arena().unwrap_err();
        assert!(err.to_string().contains("duplicate monster id"));
    }

    #[test]
    fn test_empty_roster_rejected() {
        let err = parse_scenario("monsters = []").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_bad_kind_is_parse_error() {
        let toml = r#"
[[monsters]]
id = "slime"
kind = "earth"
attack_power = 2
"#;
        assert!(matches!(
            parse_scenario(toml),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_default_scenario_loads() {
        let scenario = default_scenario();
        assert_eq!(scenario.title(), "Wizzrobe's Gauntlet");
        assert_eq!(scenario.monsters.len(), 3);
        assert_eq!(scenario.rounds.len(), 5);
        assert_eq!(scenario.rounds[0], ScenarioConfig::classic().rounds[0]);

        let arena = scenario.build_arena().unwrap();
        assert_eq!(arena.get("wizzrobe").unwrap().name, "Fiery-wizzrobe");
        assert_eq!(
            arena.get("demon_firesage").unwrap().name,
            "Fiery-demon firesage"
        );
    }

    #[test]
    fn test_invalid_bundled_scenario_falls_back_to_classic() {
        let broken = r#"
[[monsters]]
id = "slime"
attack_power = 2

[[rounds]]
actor = "ghost"
enemies = ["slime"]
"#;
        assert_eq!(scenario_or_classic(broken), ScenarioConfig::classic());
        assert_eq!(scenario_or_classic("not = [valid"), ScenarioConfig::classic());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_scenario(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
