//! Combat resolution - Charge, attack and fight between combatants

mod narration;
mod resolution;
mod result;

pub use narration::Narration;
pub use resolution::{
    attack, charge, effective_attack_power, fight, fire_bonus, FIRE_BLAZING_THRESHOLD,
    FIRE_HOT_THRESHOLD,
};
pub use result::{AttackResult, ChargeResult, FightResult};
