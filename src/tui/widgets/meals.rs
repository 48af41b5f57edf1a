use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::Meal;
use crate::tui::theme;
use crate::utils::format::{format_number, format_time};

pub fn render(frame: &mut Frame, area: Rect, meals: &[Meal]) {
    let block = Block::default()
        .title(Span::styled(" Recent Meals ", theme::green()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![Line::from("")];

    if meals.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("  No meals logged today  ·  ", theme::dim()),
            Span::styled("[a]", theme::green()),
            Span::styled(" add one", theme::dim()),
        ]));
    }

    for meal in meals {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", meal.name), theme::bold()),
            Span::styled(
                format!("  {} kcal", format_number(meal.calories)),
                theme::green(),
            ),
        ]));
        let mut detail = format!("  {} • {}", meal.slot, format_time(meal.time));
        let m = meal.macros;
        if m.protein_g + m.carbs_g + m.fat_g > 0 {
            detail.push_str(&format!(
                "  ·  P {}g  C {}g  F {}g",
                m.protein_g, m.carbs_g, m.fat_g
            ));
        }
        lines.push(Line::from(Span::styled(detail, theme::dim())));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
