//! Reusable UI components.

pub mod detail_popup;
pub mod status_bar;
pub mod stock_table;
