//! The `stock-list` table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use crate::tui::app::App;
use crate::view::{Container, RowDescriptor, Trend};

/// Column headers, in display order.
const HEADERS: [&str; 4] = ["Code", "Name", "Price", "Change"];

/// Returns the colour of a change cell.
pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
    }
}

fn row(descriptor: &RowDescriptor) -> Row<'_> {
    Row::new(vec![
        Cell::from(descriptor.code.as_str()),
        Cell::from(descriptor.name.as_str()),
        Cell::from(descriptor.price.as_str()),
        Cell::from(descriptor.change.as_str())
            .style(Style::default().fg(trend_color(descriptor.trend))),
    ])
}

/// Renders the stock table.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let list = app.stock_list();

    let header = Row::new(HEADERS.map(Cell::from))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let block = Block::default()
        .title(format!(" {} ", list.id()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let table = Table::new(
        list.rows().iter().map(row),
        [
            Constraint::Length(10),
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = TableState::default().with_selected(app.selected);
    frame.render_stateful_widget(table, area, &mut state);
}
