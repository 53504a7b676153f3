//! Terminal User Interface for the live stock table.
//!
//! Provides a Ratatui-based TUI that draws the `stock-list` container,
//! plus a detail popup for the selected stock.

pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
