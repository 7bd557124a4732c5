//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section("═══ Navigation ═══"),
        key_line("1-3", "Jump to tab (Battle/Roster/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Scroll log / select combatant"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section("═══ Battle ═══"),
        key_line("Space / n", "Play the next round"),
        key_line("a", "Play all remaining rounds"),
        key_line("r", "Reset the scenario"),
        key_line("x", "Export fight history to JSON"),
        Line::from(""),
        section("═══ Game Mechanics ═══"),
        Line::from(""),
        heading("Round:"),
        Line::from("  The actor charges once, then attacks each enemy in order"),
        Line::from("  A combatant at 0 hit points or less cannot attack"),
        Line::from(""),
        heading("Base monster (10 hp):"),
        Line::from("  Charge does nothing; attack strikes once"),
        Line::from(""),
        heading("Fire monster (15 hp, starts at 32 degrees):"),
        Line::from("  Charge heals 1 (while alive) and doubles the temperature"),
        Line::from("  Strike bonus: +3 from 100 degrees, +5 from 200 degrees"),
        Line::from(""),
        heading("Water monster (20 hp):"),
        Line::from("  Charge adds 2 L; more than 5 L spills it all"),
        Line::from("  Attack strikes once per litre, then empties the bladder"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Mechanics "));

    f.render_widget(paragraph, area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn heading(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, Style::default().fg(Color::Yellow)))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
