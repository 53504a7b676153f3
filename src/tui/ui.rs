//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::App;
use super::components::{detail_popup, status_bar, stock_table};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Status bar
            Constraint::Min(5),    // Stock table
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    render_title(frame, layout[0]);
    status_bar::render(frame, layout[1], app);
    stock_table::render(frame, layout[2], app);
    render_keybindings(frame, layout[3]);

    if let Some(detail) = &app.detail {
        detail_popup::render(frame, layout[2], detail);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![Span::styled(
        " stockwatch ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_keybindings(frame: &mut Frame, area: Rect) {
    let help = "[j/k]select [Enter]detail [Esc]close [q]quit";

    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
