//! Battle log view

use crate::app::{App, LogEntry};
use crate::ui::{life_bar, life_color, life_percent};
use monster_core::Narration;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(50),    // Main battle area
            Constraint::Length(36), // Roster panel
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Status bar
            Constraint::Min(0),    // Battle log
        ])
        .split(chunks[0]);

    draw_status_bar(f, app, main_chunks[0]);
    draw_battle_log(f, app, main_chunks[1]);
    draw_roster_panel(f, app, chunks[1]);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let runner = &app.runner;
    let next = app
        .upcoming_round()
        .unwrap_or_else(|| "scenario finished".to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled("Round: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/{}", runner.rounds_played(), runner.total_rounds()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("Standing: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/{}", runner.arena().survivors().len(), runner.arena().len()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Next: ", Style::default().fg(Color::Gray)),
            Span::styled(next, Style::default().fg(Color::Yellow)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Battle Status "));

    f.render_widget(paragraph, area);
}

fn draw_battle_log(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let end = app.battle_log.len().saturating_sub(app.log_offset);
    let start = end.saturating_sub(visible);

    let items: Vec<ListItem> = app.battle_log[start..end]
        .iter()
        .map(|entry| ListItem::new(log_line(entry)))
        .collect();

    let title = if app.log_offset > 0 {
        format!(" Battle Log (↑{} lines) ", app.log_offset)
    } else {
        " Battle Log (↑/↓ to scroll) ".to_string()
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(list, area);
}

fn log_line(entry: &LogEntry) -> Line<'static> {
    match entry {
        LogEntry::Round { number, actor } => Line::from(Span::styled(
            format!("━━━ Round {}: {} ━━━", number, actor),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        LogEntry::Summary(summary) => Line::from(Span::styled(
            format!("  ▶ {}", summary),
            Style::default().fg(Color::DarkGray),
        )),
        LogEntry::Event(event) => Line::from(Span::styled(
            format!("  {}", event),
            narration_style(event),
        )),
    }
}

fn narration_style(event: &Narration) -> Style {
    match event {
        Narration::Died { .. } => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Narration::Attacked { .. } => Style::default().fg(Color::White),
        Narration::TooWeakToAttack { .. } => Style::default().fg(Color::DarkGray),
        Narration::FireTaunt { .. } | Narration::TemperatureRaised { .. } => {
            Style::default().fg(Color::LightRed)
        }
        Narration::BladderFilled { .. }
        | Narration::MultiAttack { .. }
        | Narration::Soaked { .. } => Style::default().fg(Color::LightBlue),
        Narration::BladderOverflowed { .. } => Style::default().fg(Color::Magenta),
        Narration::ChargedUp { .. } => Style::default().fg(Color::Yellow),
    }
}

fn draw_roster_panel(f: &mut Frame, app: &App, area: Rect) {
    let bar_width = area.width.saturating_sub(4) as usize;
    let mut lines = Vec::new();

    for (id, combatant) in app.runner.arena().combatants() {
        let start = app.starting_hit_points(id);
        let percent = life_percent(combatant.hit_points, start);
        let color = if combatant.is_alive() {
            life_color(percent)
        } else {
            Color::DarkGray
        };

        lines.push(Line::from(vec![
            Span::styled(
                combatant.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}/{}", combatant.hit_points, start),
                Style::default().fg(color),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            life_bar(combatant.hit_points, start, bar_width),
            Style::default().fg(color),
        )));
        lines.push(Line::from(Span::styled(
            if combatant.is_alive() {
                combatant.kind_state()
            } else {
                "DEFEATED".to_string()
            },
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Combatants "));

    f.render_widget(paragraph, area);
}
