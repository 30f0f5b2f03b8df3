//! Battle view - fighter panels and combat log

use super::{hp_bar, hp_color, stat_line};
use crate::app::App;
use battle_core::{Character, Combatant};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Fighters
            Constraint::Length(3), // Status
            Constraint::Min(0),    // Combat log
        ])
        .split(area);

    let fighters = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let next = app.battle.next_attacker();
    draw_fighter(f, &app.first, next == Combatant::First && !app.is_finished(), fighters[0]);
    draw_fighter(f, &app.second, next == Combatant::Second && !app.is_finished(), fighters[1]);
    draw_status(f, app, chunks[1]);
    draw_combat_log(f, app, chunks[2]);
}

fn draw_fighter(f: &mut Frame, character: &Character, attacking_next: bool, area: Rect) {
    let percent = character.hp_percent();
    let color = hp_color(percent);
    let bar_width = area.width.saturating_sub(4) as usize;
    let weapon = character.weapon();

    let lines = vec![
        Line::from(vec![
            Span::styled("HP ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.1}/{}", character.hp(), character.max_hp()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" ({:.0}%)", percent), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(hp_bar(percent, bar_width), Style::default().fg(color))),
        stat_line("Level", character.level),
        stat_line("Attack", character.attack),
        stat_line("Defense", character.defense),
        stat_line(
            "Weapon",
            format!("{} (power {}, lvl {})", weapon.name(), weapon.power, weapon.min_level),
        ),
    ];

    let title = if attacking_next {
        format!(" ▶ {} ", character.name())
    } else {
        format!(" {} ", character.name())
    };
    let border_style = if attacking_next {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    f.render_widget(paragraph, area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(ref error) = app.error {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(ref outcome) = app.outcome {
        Line::from(vec![
            Span::styled("Finished: ", Style::default().fg(Color::Gray)),
            Span::styled(
                outcome.summary(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("Turn ", Style::default().fg(Color::Gray)),
            Span::styled(
                app.battle.turn().to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Status "));
    f.render_widget(paragraph, area);
}

fn draw_combat_log(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .combat_log
        .lines()
        .iter()
        .skip(app.log_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|line| {
            let style = if line.contains("CRITICAL HIT!") {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if line.contains("sleeping with the fishes") || line.starts_with("Battle stopped") {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else if line.contains(" took ") {
                Style::default().fg(Color::Red)
            } else if line.contains(" used ") {
                Style::default().fg(Color::Cyan)
            } else if line.contains("starts a battle") {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(line.replace('\t', "    "), style)))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Combat Log "));
    f.render_widget(list, area);
}
