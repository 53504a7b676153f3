//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::App;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = app.stock_list().len();
    let position = match app.selected {
        Some(i) => format!(" {}/{} ", i + 1, rows),
        None => format!(" {rows} rows "),
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.controller.endpoint()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("│"),
    ];
    let width = remaining_width(area.width, &spans);
    spans.push(Span::raw(format!("{position:>width$}")));

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}

/// Columns left after `spans` on a bar `total` cells wide.
fn remaining_width(total: u16, spans: &[Span<'_>]) -> usize {
    let used: usize = spans.iter().map(Span::width).sum();
    usize::from(total.saturating_sub(u16::try_from(used).unwrap_or(u16::MAX)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_display_columns_not_bytes() {
        // Each CJK character takes two columns but three bytes.
        let spans = [Span::raw(" http://例子.com "), Span::raw("│")];
        assert_eq!(remaining_width(40, &spans), 40 - 18);
    }

    #[test]
    fn endpoint_wider_than_the_bar_leaves_nothing() {
        let endpoint = format!("http://{}", "a".repeat(70_000));
        let spans = [Span::raw(endpoint), Span::raw("│")];
        assert_eq!(remaining_width(80, &spans), 0);
    }
}
