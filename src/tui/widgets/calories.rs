use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::engine::CalorieProgress;
use crate::tui::theme;
use crate::utils::format::format_number;

/// Dial glyph for a ring angle, one step per quarter turn.
pub fn ring_glyph(angle_degrees: f64) -> &'static str {
    const GLYPHS: [&str; 5] = ["○", "◔", "◑", "◕", "●"];
    let step = (angle_degrees / 90.0).round().clamp(0.0, 4.0) as usize;
    GLYPHS[step]
}

pub fn render(frame: &mut Frame, area: Rect, progress: &CalorieProgress) {
    let block = Block::default()
        .title(Span::styled(" Calories ", theme::green()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // big number
            Constraint::Length(1), // goal
            Constraint::Length(1), // percent
            Constraint::Length(1), // gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let big = BigText::builder()
        .pixel_size(PixelSize::HalfHeight)
        .style(theme::bold())
        .lines(vec![format_number(progress.consumed).into()])
        .build();
    frame.render_widget(big, rows[0]);

    let goal_line = Line::from(Span::styled(
        format!("  / {} kcal", format_number(progress.goal)),
        theme::dim(),
    ));
    frame.render_widget(Paragraph::new(goal_line), rows[1]);

    let accent = if progress.over_goal() {
        theme::amber()
    } else {
        theme::green()
    };
    let remaining = if progress.over_goal() {
        format!(
            "{} kcal over",
            format_number(progress.consumed - progress.goal)
        )
    } else {
        format!("{} kcal left", format_number(progress.remaining_kcal()))
    };
    let percent_line = Line::from(vec![
        Span::styled(format!("  {} ", ring_glyph(progress.angle_degrees())), accent),
        Span::styled(
            format!("{}%", progress.display_percent()),
            accent.add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ·  {}", remaining), theme::dim()),
    ]);
    frame.render_widget(Paragraph::new(percent_line), rows[2]);

    let gauge_area = Rect {
        x: rows[3].x + 2,
        width: rows[3].width.saturating_sub(4),
        ..rows[3]
    };
    let gauge = Gauge::default()
        .gauge_style(accent.bg(theme::BG))
        .ratio(progress.ratio)
        .label("");
    frame.render_widget(gauge, gauge_area);

    if progress.over_goal() && rows[4].height > 0 {
        let note = Paragraph::new(Line::from(Span::styled(
            "ring caps at 100%",
            theme::dim(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(note, rows[4]);
    }
}
