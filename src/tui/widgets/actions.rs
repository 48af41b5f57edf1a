//! Quick-action tiles. The label/colour/glyph mapping belongs to the view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    ScanMeal,
    Nootropics,
    Supplements,
    Research,
}

impl QuickAction {
    pub fn all() -> [QuickAction; 4] {
        [
            QuickAction::ScanMeal,
            QuickAction::Nootropics,
            QuickAction::Supplements,
            QuickAction::Research,
        ]
    }

    /// Action bound to a digit key, 1-based.
    pub fn from_key(c: char) -> Option<QuickAction> {
        let idx = c.to_digit(10)?.checked_sub(1)? as usize;
        Self::all().get(idx).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::ScanMeal => "Scan Meal",
            QuickAction::Nootropics => "Nootropics",
            QuickAction::Supplements => "Supplements",
            QuickAction::Research => "Research",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            QuickAction::ScanMeal => "◉",
            QuickAction::Nootropics => "✺",
            QuickAction::Supplements => "⚗",
            QuickAction::Research => "▤",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            QuickAction::ScanMeal => theme::GREEN,
            QuickAction::Nootropics => theme::PURPLE,
            QuickAction::Supplements => theme::AMBER,
            QuickAction::Research => theme::CYAN,
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect) {
    let actions = QuickAction::all();
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (i, (action, tile)) in actions.iter().zip(tiles.iter()).enumerate() {
        let style = Style::default().fg(action.color());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(theme::surface());
        let text = vec![
            Line::from(vec![
                Span::styled(action.glyph(), style),
                Span::styled(format!(" [{}]", i + 1), theme::dim()),
            ]),
            Line::from(Span::styled(action.label(), theme::bold())),
        ];
        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, *tile);
    }
}
