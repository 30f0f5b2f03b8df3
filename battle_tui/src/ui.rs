//! UI rendering

mod battle_view;
mod help_view;

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_title(f, app, chunks[0]);

    if app.show_help {
        help_view::draw(f, chunks[1]);
    } else {
        battle_view::draw(f, app, chunks[1]);
    }

    draw_keybindings(f, chunks[2]);
}

fn draw_title(f: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            app.first.name().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  vs  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.second.name().to_string(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("    seed {}", app.seed), Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Battle "))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_keybindings(f: &mut Frame, area: Rect) {
    let keys = [
        ("Space/a", "Next turn"),
        ("f", "Fight"),
        ("r", "Reset"),
        ("n", "Next foe"),
        ("s", "Swap"),
        ("?", "Help"),
        ("q", "Quit"),
    ];

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

/// Color for a health percentage
pub fn hp_color(percent: f64) -> Color {
    if percent > 50.0 {
        Color::Green
    } else if percent > 25.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Text health bar, `width` cells wide
pub fn hp_bar(percent: f64, width: usize) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

pub fn stat_line(name: &str, value: impl std::fmt::Display) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:10}", name), Style::default().fg(Color::Gray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hp_bar_width() {
        assert_eq!(hp_bar(100.0, 10).chars().count(), 10);
        assert_eq!(hp_bar(0.0, 10), "░".repeat(10));
        assert_eq!(hp_bar(50.0, 4), "██░░");
    }

    #[test]
    fn test_hp_color_thresholds() {
        assert_eq!(hp_color(80.0), Color::Green);
        assert_eq!(hp_color(40.0), Color::Yellow);
        assert_eq!(hp_color(10.0), Color::Red);
    }
}
