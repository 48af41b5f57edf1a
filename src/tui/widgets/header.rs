use chrono::{Local, Timelike};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::engine::Level;
use crate::models::DashboardStats;
use crate::tui::theme;
use crate::utils::format::format_number;

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

pub fn render(frame: &mut Frame, area: Rect, name: &str, stats: &DashboardStats) {
    let now = Local::now();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::green().add_modifier(Modifier::BOLD))
        .style(theme::base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner);

    let level = Level::for_xp(stats.points);
    let left = vec![
        Line::from(Span::styled(
            format!("  {}, {}", greeting(now.hour()), name),
            theme::bold(),
        )),
        Line::from(vec![
            Span::styled(
                format!("  Level {} • {} XP", stats.level, format_number(stats.points)),
                theme::green(),
            ),
            Span::styled(format!("  ·  {}", level.title), theme::dim()),
        ]),
        Line::from(Span::styled(
            format!("  {}", now.format("%A, %b %d")),
            theme::dim(),
        )),
    ];
    frame.render_widget(Paragraph::new(left), halves[0]);

    let badge = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("⚡ ", theme::green()),
            Span::styled(
                format!("{} day streak  ", stats.streak_days),
                theme::green().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(badge).alignment(Alignment::Right),
        halves[1],
    );
}
