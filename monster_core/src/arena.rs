//! Arena - Named roster of combatants running scripted fights

use crate::combat::{attack, charge, FightResult};
use crate::combatant::Combatant;
use thiserror::Error;
use tracing::info;

/// Arena lookup and scripting errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    #[error("Unknown combatant: {0}")]
    UnknownCombatant(String),
    #[error("Combatant id already in use: {0}")]
    DuplicateCombatant(String),
    #[error("Combatant cannot fight itself: {0}")]
    SelfTarget(String),
}

/// Roster of combatants addressed by id, with the history of fights run
#[derive(Debug, Clone, Default)]
pub struct Arena {
    ids: Vec<String>,
    combatants: Vec<Combatant>,
    /// Snapshot of each combatant as it entered the arena
    initial: Vec<Combatant>,
    history: Vec<FightResult>,
}

impl Arena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a combatant under a unique id
    pub fn add(&mut self, id: impl Into<String>, combatant: Combatant) -> Result<(), ArenaError> {
        let id = id.into();
        if self.ids.contains(&id) {
            return Err(ArenaError::DuplicateCombatant(id));
        }
        self.ids.push(id);
        self.initial.push(combatant.clone());
        self.combatants.push(combatant);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Get a combatant by id
    pub fn get(&self, id: &str) -> Option<&Combatant> {
        self.position(id).map(|idx| &self.combatants[idx])
    }

    /// Get a combatant as it was when it entered the arena
    pub fn initial(&self, id: &str) -> Option<&Combatant> {
        self.position(id).map(|idx| &self.initial[idx])
    }

    /// Iterate `(id, combatant)` pairs in insertion order
    pub fn combatants(&self) -> impl Iterator<Item = (&str, &Combatant)> {
        self.ids.iter().map(String::as_str).zip(self.combatants.iter())
    }

    /// Ids of combatants still alive, in insertion order
    pub fn survivors(&self) -> Vec<&str> {
        self.combatants()
            .filter(|(_, c)| c.is_alive())
            .map(|(id, _)| id)
            .collect()
    }

    /// Fights run so far, oldest first
    pub fn history(&self) -> &[FightResult] {
        &self.history
    }

    /// Run a fight: the actor charges, then attacks each enemy in order.
    ///
    /// All ids are validated before anything is mutated. An enemy may be
    /// listed more than once; the actor may not list itself.
    pub fn fight<S: AsRef<str>>(
        &mut self,
        actor_id: &str,
        enemy_ids: &[S],
    ) -> Result<FightResult, ArenaError> {
        let actor = self.index_of(actor_id)?;
        let targets = enemy_ids
            .iter()
            .map(|id| -> Result<usize, ArenaError> {
                let idx = self.index_of(id.as_ref())?;
                if idx == actor {
                    Err(ArenaError::SelfTarget(actor_id.to_string()))
                } else {
                    Ok(idx)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut result = FightResult::new(charge(&mut self.combatants[actor]));
        for target in targets {
            let (attacker, defender) = pair_mut(&mut self.combatants, actor, target);
            result.attacks.push(attack(attacker, defender));
        }

        info!(
            target: "monster_core.arena",
            actor = actor_id,
            fight = self.history.len() + 1,
            summary = %result.summary(),
            "fight recorded"
        );

        self.history.push(result.clone());
        Ok(result)
    }

    /// Restore every combatant to its entry state and forget the history
    pub fn reset(&mut self) {
        self.combatants.clone_from(&self.initial);
        self.history.clear();
    }

    /// Fight history as pretty JSON
    pub fn history_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.history)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    fn index_of(&self, id: &str) -> Result<usize, ArenaError> {
        self.position(id)
            .ok_or_else(|| ArenaError::UnknownCombatant(id.to_string()))
    }
}

/// Borrow two distinct elements of a slice mutably
fn pair_mut<T>(items: &mut [T], first: usize, second: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(first, second);
    if first < second {
        let (left, right) = items.split_at_mut(second);
        (&mut left[first], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(first);
        (&mut right[0], &mut left[second])
    }
}
