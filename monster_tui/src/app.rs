//! Application state

use monster_core::{Combatant, ConfigError, FightResult, Narration, ScenarioConfig, ScenarioRunner};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Where `x` writes the fight history
pub const DEFAULT_EXPORT_PATH: &str = "battle_log.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Battle,
    Roster,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Battle, Tab::Roster, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Battle => "Battle",
            Tab::Roster => "Roster",
            Tab::Help => "Help",
        }
    }
}

/// One line of the battle log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// Header opening a round
    Round { number: usize, actor: String },
    Event(Narration),
    /// Closing summary of a round
    Summary(String),
}

pub struct App {
    pub current_tab: Tab,
    pub runner: ScenarioRunner,
    pub battle_log: Vec<LogEntry>,
    /// Lines scrolled back from the newest log entry
    pub log_offset: usize,
    pub selected_combatant: usize,
    /// Last status message shown in the footer
    pub status: Option<String>,
    previous_tab: Tab,
    export_path: PathBuf,
}

impl App {
    pub fn new(scenario: ScenarioConfig) -> Result<Self, ConfigError> {
        let runner = ScenarioRunner::new(scenario)?;
        Ok(App {
            current_tab: Tab::Battle,
            runner,
            battle_log: Vec::new(),
            log_offset: 0,
            selected_combatant: 0,
            status: None,
            previous_tab: Tab::Battle,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        })
    }

    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    // === Navigation ===

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }

    pub fn set_tab(&mut self, idx: usize) {
        if let Some(tab) = Tab::all().get(idx) {
            self.current_tab = *tab;
        }
    }

    pub fn toggle_help(&mut self) {
        if self.current_tab == Tab::Help {
            self.current_tab = self.previous_tab;
        } else {
            self.previous_tab = self.current_tab;
            self.current_tab = Tab::Help;
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Battle => {
                let max_offset = self.battle_log.len().saturating_sub(1);
                self.log_offset = (self.log_offset + 1).min(max_offset);
            }
            Tab::Roster => {
                self.selected_combatant = self.selected_combatant.saturating_sub(1);
            }
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Battle => {
                self.log_offset = self.log_offset.saturating_sub(1);
            }
            Tab::Roster => {
                let last = self.runner.arena().len().saturating_sub(1);
                self.selected_combatant = (self.selected_combatant + 1).min(last);
            }
            Tab::Help => {}
        }
    }

    // === Battle ===

    /// Play the next scripted round. Returns whether a round was played.
    pub fn step_round(&mut self) -> bool {
        let number = self.runner.rounds_played() + 1;
        match self.runner.step() {
            Ok(Some(fight)) => {
                self.status = Some(format!("Round {}: {}", number, fight.summary()));
                self.record(number, &fight);
                true
            }
            Ok(None) => {
                self.status = Some("Scenario finished - press r to replay".to_string());
                false
            }
            Err(e) => {
                warn!(target: "monster_tui", error = %e, "round failed");
                self.status = Some(format!("Round {} failed: {}", number, e));
                false
            }
        }
    }

    /// Play every remaining round
    pub fn run_all(&mut self) {
        while self.step_round() {}
    }

    /// Restore the starting roster and clear the log
    pub fn reset(&mut self) {
        self.runner.reset();
        self.battle_log.clear();
        self.log_offset = 0;
        self.status = Some("Scenario reset".to_string());
        info!(target: "monster_tui", "scenario reset");
    }

    /// Write the fight history as JSON
    pub fn export_log(&mut self) {
        let written = self
            .runner
            .arena()
            .history_json()
            .map_err(ConfigError::from)
            .and_then(|json| fs::write(&self.export_path, json).map_err(ConfigError::from));

        self.status = Some(match written {
            Ok(()) => {
                info!(target: "monster_tui", path = %self.export_path.display(), "history exported");
                format!(
                    "Exported {} fights to {}",
                    self.runner.arena().history().len(),
                    self.export_path.display()
                )
            }
            Err(e) => {
                warn!(target: "monster_tui", error = %e, "export failed");
                format!("Export failed: {}", e)
            }
        });
    }

    // === Queries ===

    /// Combatant highlighted on the roster tab
    pub fn selected(&self) -> Option<(&str, &Combatant)> {
        self.runner.arena().combatants().nth(self.selected_combatant)
    }

    /// Starting hit points of a combatant, used to scale life bars
    pub fn starting_hit_points(&self, id: &str) -> i32 {
        self.runner
            .arena()
            .initial(id)
            .map(|c| c.hit_points)
            .unwrap_or(1)
    }

    /// Description of the next round, if any
    pub fn upcoming_round(&self) -> Option<String> {
        self.runner.upcoming().map(|round| {
            if round.enemies.is_empty() {
                format!("{} charges", round.actor)
            } else {
                format!("{} → {}", round.actor, round.enemies.join(", "))
            }
        })
    }

    fn record(&mut self, number: usize, fight: &FightResult) {
        self.battle_log.push(LogEntry::Round {
            number,
            actor: fight.actor.clone(),
        });
        self.battle_log
            .extend(fight.narration().cloned().map(LogEntry::Event));
        self.battle_log.push(LogEntry::Summary(fight.summary()));
        self.log_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monster_core::default_scenario;

    fn classic_app() -> App {
        App::new(ScenarioConfig::classic()).unwrap()
    }

    #[test]
    fn test_step_records_round() {
        let mut app = classic_app();
        app.step_round();

        assert_eq!(
            app.battle_log.first(),
            Some(&LogEntry::Round {
                number: 1,
                actor: "Fiery-wizzrobe".to_string()
            })
        );
        let events = app
            .battle_log
            .iter()
            .filter(|e| matches!(e, LogEntry::Event(_)))
            .count();
        assert_eq!(events, 6);
        assert!(matches!(app.battle_log.last(), Some(LogEntry::Summary(_))));
        assert!(app.status.as_deref().unwrap().starts_with("Round 1"));
    }

    #[test]
    fn test_step_past_end_reports_finished() {
        let mut app = classic_app();
        app.step_round();
        let logged = app.battle_log.len();

        app.step_round();

        assert_eq!(app.battle_log.len(), logged);
        assert!(app.status.as_deref().unwrap().contains("finished"));
    }

    #[test]
    fn test_run_all_and_reset() {
        let mut app = App::new(default_scenario()).unwrap();
        app.run_all();
        assert!(app.runner.is_finished());
        assert_eq!(app.runner.arena().history().len(), 5);

        app.reset();
        assert!(app.battle_log.is_empty());
        assert_eq!(app.runner.rounds_played(), 0);
        assert_eq!(app.upcoming_round().as_deref(), Some("wizzrobe → demon_firesage, cthulhu"));
    }

    #[test]
    fn test_tab_cycling() {
        let mut app = classic_app();
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Roster);
        app.prev_tab();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.set_tab(1);
        assert_eq!(app.current_tab, Tab::Roster);

        app.toggle_help();
        assert_eq!(app.current_tab, Tab::Help);
        app.toggle_help();
        assert_eq!(app.current_tab, Tab::Roster);
    }

    #[test]
    fn test_scroll_bounds() {
        let mut app = classic_app();
        app.on_up();
        assert_eq!(app.log_offset, 0, "nothing to scroll yet");

        app.step_round();
        for _ in 0..50 {
            app.on_up();
        }
        assert_eq!(app.log_offset, app.battle_log.len() - 1);
        app.on_down();
        assert_eq!(app.log_offset, app.battle_log.len() - 2);

        app.set_tab(1);
        for _ in 0..10 {
            app.on_down();
        }
        assert_eq!(app.selected().map(|(id, _)| id), Some("cthulhu"));
    }

    #[test]
    fn test_starting_hit_points() {
        let mut app = classic_app();
        app.step_round();
        assert_eq!(app.starting_hit_points("cthulhu"), 20);
        assert_eq!(app.starting_hit_points("missing"), 1);
    }

    #[test]
    fn test_export_writes_history() {
        let path = std::env::temp_dir().join(format!(
            "monster_tui_export_{}.json",
            std::process::id()
        ));
        let mut app = classic_app().with_export_path(&path);
        app.step_round();
        app.export_log();

        let content = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json.as_array().map(|a| a.len()), Some(1));
        assert!(app.status.as_deref().unwrap().starts_with("Exported 1"));
        let _ = fs::remove_file(&path);
    }
}
