use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Insight;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, insight: &Insight) {
    let block = Block::default()
        .title(Span::styled(" Biohacker Insights ", theme::green()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let text = vec![
        Line::from(vec![
            Span::styled(" ❦ ", theme::green()),
            Span::styled(insight.title.as_str(), theme::bold()),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!(" {}", insight.body), theme::dim())),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
