//! Roster tab view

use crate::app::App;
use crate::ui::life_bar;
use monster_core::combat::{effective_attack_power, FIRE_BLAZING_THRESHOLD, FIRE_HOT_THRESHOLD};
use monster_core::{Combatant, Kind, Liveness};
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
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_list(f, app, chunks[0]);
    draw_details(f, app, chunks[1]);
}

fn draw_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .runner
        .arena()
        .combatants()
        .enumerate()
        .map(|(i, (id, combatant))| {
            let mut style = if combatant.is_alive() {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if i == app.selected_combatant {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:16}", id), style),
                Span::styled(
                    format!(" [{}]", combatant.kind_tag()),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Roster "));
    f.render_widget(list, area);
}

fn draw_details(f: &mut Frame, app: &App, area: Rect) {
    let Some((id, combatant)) = app.selected() else {
        let empty = Paragraph::new("No combatants")
            .block(Block::default().borders(Borders::ALL).title(" Details "));
        f.render_widget(empty, area);
        return;
    };

    let start = app.starting_hit_points(id);
    let liveness = match combatant.liveness() {
        Liveness::Alive => Span::styled("Alive", Style::default().fg(Color::Green)),
        Liveness::Defeated => Span::styled(
            "Defeated",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            combatant.name.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        detail_line("Kind", combatant.kind_tag().to_string()),
        Line::from(vec![
            Span::styled(format!("{:20}", "State"), Style::default().fg(Color::Gray)),
            liveness,
        ]),
        detail_line("Hit points", format!("{} / {}", combatant.hit_points, start)),
        Line::from(Span::styled(
            life_bar(combatant.hit_points, start, 30),
            Style::default().fg(Color::Green),
        )),
        detail_line("Attack power", combatant.attack_power.to_string()),
        detail_line(
            "Next strike power",
            effective_attack_power(combatant).to_string(),
        ),
        Line::from(""),
    ];

    lines.extend(kind_lines(combatant));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Details "));
    f.render_widget(paragraph, area);
}

fn kind_lines(combatant: &Combatant) -> Vec<Line<'static>> {
    match combatant.kind {
        Kind::Base => vec![Line::from(Span::styled(
            "No special powers",
            Style::default().fg(Color::DarkGray),
        ))],
        Kind::Fire { temperature } => {
            let band = if temperature < FIRE_HOT_THRESHOLD {
                "warm (no bonus)"
            } else if temperature < FIRE_BLAZING_THRESHOLD {
                "hot (+3)"
            } else {
                "blazing (+5)"
            };
            vec![
                detail_line("Temperature", format!("{} degrees", temperature)),
                detail_line("Band", band.to_string()),
            ]
        }
        Kind::Water { bladder } => vec![
            detail_line("Bladder", format!("{} L water", bladder)),
            detail_line("Next attack strikes", bladder.max(1).to_string()),
        ],
    }
}

fn detail_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}
