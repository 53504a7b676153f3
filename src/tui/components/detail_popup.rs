//! Stock detail popup.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::tui::app::{DetailBody, DetailView};

/// Returns the popup text for a detail body.
pub fn lines(body: &DetailBody) -> Vec<Line<'static>> {
    match body {
        DetailBody::Loading => vec![Line::styled("Loading...", Style::default().fg(Color::DarkGray))],
        DetailBody::Found(value) => serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| value.to_string())
            .lines()
            .map(|l| Line::raw(l.to_string()))
            .collect(),
        DetailBody::NotFound => vec![Line::styled(
            "Stock not found",
            Style::default().fg(Color::Yellow),
        )],
        DetailBody::Failed(e) => vec![Line::styled(e.clone(), Style::default().fg(Color::Red))],
    }
}

/// Renders the popup centred in `area`.
pub fn render(frame: &mut Frame, area: Rect, detail: &DetailView) {
    let [popup] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(popup);

    let block = Block::default()
        .title(format!(" {} [Esc]close ", detail.code))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let para = Paragraph::new(lines(&detail.body))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup);
    frame.render_widget(para, popup);
}
