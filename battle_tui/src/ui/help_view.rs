//! Help view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, area: Rect) {
    let lines = vec![
        section("═══ Keys ═══"),
        key_line("Space / a / Enter", "Play the next turn"),
        key_line("f", "Fight until one side falls"),
        key_line("r", "Restart with the next seed"),
        key_line("n", "Pick the next opponent"),
        key_line("s", "Swap who attacks first"),
        key_line("↑/k  ↓/j", "Scroll the combat log"),
        key_line("?", "Toggle help"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        section("═══ Rules ═══"),
        Line::from(""),
        Line::from(Span::styled("Turns:", Style::default().fg(Color::Yellow))),
        Line::from("  The first fighter attacks on even turns, the second on odd turns."),
        Line::from("  The battle ends as soon as either fighter reaches 0 HP."),
        Line::from(""),
        Line::from(Span::styled("Damage:", Style::default().fg(Color::Yellow))),
        Line::from("  Level factor = 2 × Level / 5 + 2"),
        Line::from("  Damage = (Level factor × Power × ATK / DEF / 50 + 2) × Modifier"),
        Line::from("  Modifier = Crit × Random(0.85 to 1.0)"),
        Line::from(""),
        Line::from(Span::styled("Critical hits:", Style::default().fg(Color::Yellow))),
        Line::from("  1 in 16 attacks deals double damage."),
        Line::from(""),
        Line::from(Span::styled("Weapons:", Style::default().fg(Color::Yellow))),
        Line::from("  A weapon can only be equipped at or above its minimum level."),
        Line::from("  Fighters without a weapon fight Unarmed (power 20)."),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));
    f.render_widget(paragraph, area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}
