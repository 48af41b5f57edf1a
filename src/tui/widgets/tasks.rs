use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::Task;
use crate::tui::theme;
use crate::utils::format::pad_display;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    available_xp: u32,
    focused_idx: usize,
) {
    let block = Block::default()
        .title(Span::styled(" Today's Tasks ", theme::green()))
        .title_bottom(
            Line::from(Span::styled(
                format!(" 🏆 {} XP available ", available_xp),
                theme::amber(),
            ))
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::green())
        .style(theme::surface());

    let label_width = (area.width as usize).saturating_sub(18).max(8);

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_focused = i == focused_idx;

            let (icon, icon_style) = if task.is_completed() {
                ("●", theme::green())
            } else {
                ("○", theme::dim())
            };

            let mut label_style = if task.is_completed() {
                theme::dim().add_modifier(Modifier::CROSSED_OUT)
            } else {
                theme::bold()
            };
            if is_focused {
                label_style = label_style.fg(theme::GREEN).add_modifier(Modifier::BOLD);
            }

            let line = Line::from(vec![
                Span::styled(if is_focused { " ▸" } else { "  " }, theme::green()),
                Span::styled(format!("{} ", icon), icon_style),
                Span::styled(pad_display(&task.label, label_width), label_style),
                Span::styled(format!("+{} XP", task.reward_points), theme::purple()),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
