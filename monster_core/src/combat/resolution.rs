//! Combat resolution - Charge, attack and fight between combatants

use super::narration::Narration;
use super::result::{AttackResult, ChargeResult, FightResult};
use crate::combatant::Combatant;
use crate::types::{Kind, BLADDER_CAPACITY, BLADDER_FILL_PER_CHARGE};
use tracing::{debug, info};

/// Temperature at which fire attacks gain the small bonus
pub const FIRE_HOT_THRESHOLD: i64 = 100;
/// Temperature at which fire attacks gain the large bonus
pub const FIRE_BLAZING_THRESHOLD: i64 = 200;
const FIRE_HOT_BONUS: i32 = 3;
const FIRE_BLAZING_BONUS: i32 = 5;

/// Extra strike power granted by a fire temperature
pub fn fire_bonus(temperature: i64) -> i32 {
    if temperature < FIRE_HOT_THRESHOLD {
        0
    } else if temperature < FIRE_BLAZING_THRESHOLD {
        FIRE_HOT_BONUS
    } else {
        FIRE_BLAZING_BONUS
    }
}

/// Power each strike of this combatant's next attack will land with
pub fn effective_attack_power(combatant: &Combatant) -> i32 {
    match combatant.kind {
        Kind::Fire { temperature } => combatant
            .attack_power
            .saturating_add(fire_bonus(temperature)),
        Kind::Base | Kind::Water { .. } => combatant.attack_power,
    }
}

/// Charge up a combatant.
///
/// - Base: narration only
/// - Fire: heal by one while still alive, then double the temperature
/// - Water: add water to the bladder, spilling everything past capacity
pub fn charge(combatant: &mut Combatant) -> ChargeResult {
    let mut result = ChargeResult::new(combatant.name.clone());
    let hp_before = combatant.hit_points;

    result.narration.push(Narration::ChargedUp {
        name: combatant.name.clone(),
    });

    match combatant.kind {
        Kind::Base => {}
        Kind::Fire { temperature } => {
            if combatant.is_alive() {
                combatant.heal();
            }
            let temperature = temperature.saturating_mul(2);
            combatant.kind = Kind::Fire { temperature };
            result.narration.push(Narration::TemperatureRaised {
                name: combatant.name.clone(),
                temperature,
            });
        }
        Kind::Water { bladder } => {
            let mut level = bladder.saturating_add(BLADDER_FILL_PER_CHARGE);
            if level > BLADDER_CAPACITY {
                level = 0;
                result.narration.push(Narration::BladderOverflowed {
                    name: combatant.name.clone(),
                });
            } else {
                result.narration.push(Narration::BladderFilled {
                    name: combatant.name.clone(),
                    level,
                });
            }
            combatant.kind = Kind::Water { bladder: level };
        }
    }

    result.healed = combatant.hit_points.saturating_sub(hp_before);
    result.hit_points_after = combatant.hit_points;

    debug!(
        target: "monster_core.combat",
        combatant = %combatant.name,
        state = %combatant.kind_state(),
        hit_points = combatant.hit_points,
        "charged"
    );

    result
}

/// Attack a defender, dispatching on the attacker's kind.
///
/// A defeated attacker never touches the defender; the result is then
/// marked as not attempted and carries a failure narration per strike.
pub fn attack(attacker: &mut Combatant, defender: &mut Combatant) -> AttackResult {
    let mut result = AttackResult::new(attacker.name.clone(), defender.name.clone());
    result.defender_hp_before = defender.hit_points;
    result.effective_power = effective_attack_power(attacker);
    let was_alive = defender.is_alive();

    match attacker.kind {
        Kind::Base => {
            result.attempted = strike(attacker, result.effective_power, defender, &mut result);
        }
        Kind::Fire { temperature } => {
            result.narration.push(Narration::FireTaunt {
                name: attacker.name.clone(),
                temperature,
            });
            result.attempted = strike(attacker, result.effective_power, defender, &mut result);
        }
        Kind::Water { bladder } => {
            if bladder < 1 {
                result.attempted =
                    strike(attacker, result.effective_power, defender, &mut result);
            } else {
                result.narration.push(Narration::MultiAttack {
                    name: attacker.name.clone(),
                    strikes: bladder,
                });
                let mut attempted = false;
                for _ in 0..bladder {
                    attempted |= strike(attacker, result.effective_power, defender, &mut result);
                }
                result.attempted = attempted;
                attacker.kind = Kind::Water { bladder: 0 };
            }
            result.narration.push(Narration::Soaked {
                name: attacker.name.clone(),
            });
        }
    }

    result.defender_hp_after = defender.hit_points;
    result.is_killing_blow = was_alive && !defender.is_alive();

    if result.is_killing_blow {
        info!(
            target: "monster_core.combat",
            attacker = %attacker.name,
            defender = %defender.name,
            hit_points = defender.hit_points,
            "defender defeated"
        );
    }

    result
}

/// The shared base attack: one strike at the given power.
///
/// Returns whether the strike happened.
fn strike(
    attacker: &Combatant,
    power: i32,
    defender: &mut Combatant,
    result: &mut AttackResult,
) -> bool {
    if !attacker.is_alive() {
        result.narration.push(Narration::TooWeakToAttack {
            name: attacker.name.clone(),
        });
        debug!(target: "monster_core.combat", attacker = %attacker.name, "too weak to attack");
        return false;
    }

    result.narration.push(Narration::Attacked {
        attacker: attacker.name.clone(),
        defender: defender.name.clone(),
        power,
    });

    let remaining = defender.take_hit(power);
    result.strikes += 1;
    result.damage_dealt += i64::from(power);

    debug!(
        target: "monster_core.combat",
        attacker = %attacker.name,
        defender = %defender.name,
        power,
        remaining,
        "strike"
    );

    if remaining <= 0 {
        result.narration.push(Narration::Died {
            name: defender.name.clone(),
        });
    }

    true
}

/// Charge once, then attack every enemy in iteration order
pub fn fight<'a, I>(actor: &mut Combatant, enemies: I) -> FightResult
where
    I: IntoIterator<Item = &'a mut Combatant>,
{
    let mut result = FightResult::new(charge(actor));

    for enemy in enemies {
        result.attacks.push(attack(actor, enemy));
    }

    info!(
        target: "monster_core.combat",
        actor = %actor.name,
        enemies = result.attacks.len(),
        damage = result.total_damage(),
        "fight finished"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(narration: &[Narration]) -> Vec<String> {
        narration.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_base_charge_changes_nothing() {
        let mut monster = Combatant::base("slime", 2);
        let before = monster.clone();

        let result = charge(&mut monster);

        assert_eq!(monster, before);
        assert_eq!(result.healed, 0);
        assert_eq!(texts(&result.narration), vec!["slime charges up to attack"]);
    }

    #[test]
    fn test_fire_charge_heals_and_doubles() {
        let mut wizzrobe = Combatant::fire("wizzrobe", 8);

        let result = charge(&mut wizzrobe);

        assert_eq!(wizzrobe.temperature(), Some(64));
        assert_eq!(wizzrobe.hit_points, 16);
        assert_eq!(result.healed, 1);
        assert_eq!(result.hit_points_after, 16);
        assert_eq!(
            texts(&result.narration),
            vec![
                "Fiery-wizzrobe charges up to attack",
                "Fiery-wizzrobe took a magma bath and increased temperature to 64 degrees!",
            ]
        );
    }

    #[test]
    fn test_defeated_fire_charge_stays_defeated() {
        let mut ember = Combatant::fire("ember", 4).with_hit_points(0);
        let mut rat = Combatant::base("rat", 1);

        let result = charge(&mut ember);

        assert_eq!(ember.hit_points, 0);
        assert_eq!(ember.liveness(), crate::types::Liveness::Defeated);
        assert_eq!(ember.temperature(), Some(64));
        assert_eq!(result.healed, 0);

        let result = attack(&mut ember, &mut rat);
        assert!(!result.attempted);
        assert_eq!(rat.hit_points, 10);
    }

    #[test]
    fn test_water_charge_sequence_overflows() {
        let mut cthulhu = Combatant::water("cthulhu", 3);
        let mut levels = Vec::new();

        for _ in 0..5 {
            charge(&mut cthulhu);
            levels.push(cthulhu.bladder().unwrap());
        }

        assert_eq!(levels, vec![2, 4, 0, 2, 4]);
    }

    #[test]
    fn test_water_overflow_narration() {
        let mut cthulhu = Combatant::new("cthulhu", 3, Kind::Water { bladder: 4 });

        let result = charge(&mut cthulhu);

        assert_eq!(cthulhu.bladder(), Some(0));
        assert_eq!(
            result.narration.last(),
            Some(&Narration::BladderOverflowed {
                name: "cthulhu".into()
            })
        );
        assert_eq!(result.narration.len(), 2);
    }

    #[test]
    fn test_base_attack_damages_defender() {
        let mut attacker = Combatant::base("goblin", 4);
        let mut defender = Combatant::base("rat", 1);

        let result = attack(&mut attacker, &mut defender);

        assert!(result.attempted);
        assert_eq!(defender.hit_points, 6);
        assert_eq!(result.damage_dealt, 4);
        assert_eq!(result.strikes, 1);
        assert!(!result.is_killing_blow);
        assert_eq!(texts(&result.narration), vec!["goblin attacks rat at level 4"]);
    }

    #[test]
    fn test_killing_blow_narrates_death() {
        let mut attacker = Combatant::base("ogre", 12);
        let mut defender = Combatant::base("rat", 1);

        let result = attack(&mut attacker, &mut defender);

        assert!(result.is_killing_blow);
        assert_eq!(defender.hit_points, -2);
        assert!(!defender.is_alive());
        assert_eq!(result.narration.last().map(|n| n.is_death()), Some(true));
    }

    #[test]
    fn test_death_narrated_again_on_defeated_defender() {
        let mut attacker = Combatant::base("ogre", 1);
        let mut defender = Combatant::base("rat", 1).with_hit_points(0);

        let result = attack(&mut attacker, &mut defender);

        assert_eq!(defender.hit_points, -1);
        assert!(!result.is_killing_blow, "already defeated before the attack");
        assert!(result.narration.iter().any(Narration::is_death));
    }

    #[test]
    fn test_defeated_attacker_cannot_attack() {
        let mut attacker = Combatant::base("ghost", 5).with_hit_points(0);
        let mut defender = Combatant::base("rat", 1);

        let result = attack(&mut attacker, &mut defender);

        assert!(!result.attempted);
        assert_eq!(defender.hit_points, 10);
        assert_eq!(result.damage_dealt, 0);
        assert_eq!(
            texts(&result.narration),
            vec!["ghost took too much damage to attack"]
        );
    }

    #[test]
    fn test_fire_bonus_bands() {
        assert_eq!(fire_bonus(32), 0);
        assert_eq!(fire_bonus(99), 0);
        assert_eq!(fire_bonus(100), 3);
        assert_eq!(fire_bonus(199), 3);
        assert_eq!(fire_bonus(200), 5);
        assert_eq!(fire_bonus(i64::MAX), 5);
    }

    #[test]
    fn test_fire_attack_uses_boost_without_mutating_power() {
        let mut attacker = Combatant::new("blaze", 4, Kind::Fire { temperature: 128 });
        let mut defender = Combatant::base("rat", 1).with_hit_points(20);

        let result = attack(&mut attacker, &mut defender);

        assert_eq!(result.effective_power, 7);
        assert_eq!(defender.hit_points, 13);
        assert_eq!(attacker.attack_power, 4);
        assert_eq!(
            texts(&result.narration),
            vec![
                "And now you will burn from my fire at 128 degrees!",
                "blaze attacks rat at level 7",
            ]
        );
    }

    #[test]
    fn test_wizzrobe_scenario() {
        let mut wizzrobe = Combatant::fire("wizzrobe", 8);
        assert_eq!(wizzrobe.hit_points, 15);
        charge(&mut wizzrobe);
        assert_eq!(wizzrobe.temperature(), Some(64));
        assert_eq!(wizzrobe.hit_points, 16);

        let mut firesage = Combatant::fire("demon firesage", 4);
        attack(&mut wizzrobe, &mut firesage);
        assert_eq!(firesage.hit_points, 7);
    }

    #[test]
    fn test_water_bladder_multi_strike() {
        let mut attacker = Combatant::new("Watery-cthulhu", 3, Kind::Water { bladder: 3 });
        let mut defender = Combatant::fire("imp", 1);

        let result = attack(&mut attacker, &mut defender);

        assert_eq!(defender.hit_points, 15 - 9);
        assert_eq!(attacker.bladder(), Some(0));
        assert_eq!(result.strikes, 3);
        assert_eq!(result.damage_dealt, 9);
        assert_eq!(
            result.narration.first(),
            Some(&Narration::MultiAttack {
                name: "Watery-cthulhu".into(),
                strikes: 3
            })
        );
        assert_eq!(
            result.narration.last().map(|n| n.to_string()),
            Some("And now you will be soaking wet!".to_string())
        );
    }

    #[test]
    fn test_water_empty_bladder_single_strike() {
        let mut attacker = Combatant::water("cthulhu", 3);
        let mut defender = Combatant::base("rat", 1);

        let result = attack(&mut attacker, &mut defender);

        assert_eq!(result.strikes, 1);
        assert_eq!(defender.hit_points, 7);
        assert_eq!(result.narration.len(), 2);
    }

    #[test]
    fn test_defeated_water_attacker_still_empties_bladder() {
        let mut attacker =
            Combatant::new("drip", 3, Kind::Water { bladder: 2 }).with_hit_points(-1);
        let mut defender = Combatant::base("rat", 1);

        let result = attack(&mut attacker, &mut defender);

        assert!(!result.attempted);
        assert_eq!(defender.hit_points, 10);
        assert_eq!(attacker.bladder(), Some(0));
        let failures = result
            .narration
            .iter()
            .filter(|n| matches!(n, Narration::TooWeakToAttack { .. }))
            .count();
        assert_eq!(failures, 2);
    }

    #[test]
    fn test_fight_charges_then_attacks_in_order() {
        let mut wizzrobe = Combatant::fire("wizzrobe", 8);
        let mut enemies = vec![
            Combatant::fire("demon firesage", 4),
            Combatant::water("cthulhu", 3),
        ];

        let result = fight(&mut wizzrobe, &mut enemies);

        assert_eq!(result.actor, "Fiery-wizzrobe");
        assert_eq!(result.attacks.len(), 2);
        assert_eq!(result.attacks[0].defender, "Fiery-demon firesage");
        assert_eq!(result.attacks[1].defender, "Watery-cthulhu");
        assert_eq!(enemies[0].hit_points, 7);
        assert_eq!(enemies[1].hit_points, 12);
        assert_eq!(result.total_damage(), 16);
        assert_eq!(
            result.narration().next().map(|n| n.to_string()),
            Some("Fiery-wizzrobe charges up to attack".to_string())
        );
    }

    #[test]
    fn test_fight_without_enemies_only_charges() {
        let mut cthulhu = Combatant::water("cthulhu", 3);
        let result = fight(&mut cthulhu, Vec::<&mut Combatant>::new());

        assert!(result.attacks.is_empty());
        assert_eq!(cthulhu.bladder(), Some(2));
    }
}
