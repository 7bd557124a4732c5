//! monster_tui - Interactive TUI that steps through monster battle scenarios

mod app;
mod ui;

use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use monster_core::config::load_scenario;
use monster_core::{default_scenario, ConfigError, ScenarioConfig};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "monster_tui.log";

fn main() -> io::Result<()> {
    setup_logging()?;

    let scenario = scenario_from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut app = App::new(scenario).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if let Ok(path) = std::env::var("MONSTER_EXPORT") {
        app = app.with_export_path(path);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(target: "monster_tui", error = %err, "terminal loop failed");
    }
    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key(app, key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Apply a key press to the app; returns true when the user asked to quit
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => return true,
        (KeyCode::Tab, _) => app.next_tab(),
        (KeyCode::BackTab, _) => app.prev_tab(),
        (KeyCode::Char('1'), _) => app.set_tab(0),
        (KeyCode::Char('2'), _) => app.set_tab(1),
        (KeyCode::Char('3'), _) => app.set_tab(2),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
        (KeyCode::Char(' '), _) | (KeyCode::Char('n'), _) => {
            app.step_round();
        }
        (KeyCode::Char('a'), _) => app.run_all(),
        (KeyCode::Char('r'), _) => app.reset(),
        (KeyCode::Char('x'), _) => app.export_log(),
        (KeyCode::Char('?'), _) => app.toggle_help(),
        _ => {}
    }
    false
}

/// Log to a file so the terminal stays clean
fn setup_logging() -> io::Result<()> {
    let file = File::create(LOG_FILE)?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(target: "monster_tui", log_file = LOG_FILE, "logging initialized");
    Ok(())
}

/// Scenario named by `MONSTER_SCENARIO`, or the bundled one
fn scenario_from_env() -> Result<ScenarioConfig, ConfigError> {
    match std::env::var("MONSTER_SCENARIO") {
        Ok(path) => {
            tracing::info!(target: "monster_tui", path = %path, "loading scenario");
            load_scenario(Path::new(&path))
        }
        Err(_) => Ok(default_scenario()),
    }
}
