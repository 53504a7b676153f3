//! Snapshot-to-view rendering.
//!
//! [`render`] is a pure function turning a [`Snapshot`] into one
//! [`RowDescriptor`] per record. [`apply`] is the only place that touches a
//! [`Container`]: it clears the container and appends the fresh rows, so
//! whatever was displayed before is replaced wholesale.

mod list;
pub mod number;

use crate::models::{Snapshot, StockRecord};

pub use list::{STOCK_LIST_ID, StockList};

/// Class attached to every rendered row.
pub const ROW_CLASS: &str = "stock-row";

/// Visual treatment of the change column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    /// Change is zero or positive.
    Up,
    /// Change is negative.
    Down,
}

impl Trend {
    /// Classifies a change percentage. Zero (of either sign) counts as
    /// [`Trend::Up`].
    pub fn of(change_percent: f64) -> Self {
        if change_percent >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    /// Returns the class name used for the change cell.
    pub fn class(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }
}

/// Display-ready content of one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowDescriptor {
    pub code: String,
    pub name: String,
    /// Price in the shortest form that reads back as the received number.
    pub price: String,
    /// Change with two decimals and a `%` suffix.
    pub change: String,
    pub trend: Trend,
}

impl RowDescriptor {
    pub fn from_record(record: &StockRecord) -> Self {
        Self {
            code: record.code.clone(),
            name: record.name.clone(),
            price: number::to_js_string(record.price),
            change: format_change(record.change_percent),
            trend: Trend::of(record.change_percent),
        }
    }
}

/// A view element whose children are replaced on every snapshot.
pub trait Container {
    /// Identifier the container is known by in the host view.
    fn id(&self) -> &str;

    /// Removes every child row.
    fn clear(&mut self);

    /// Appends a row after the existing ones.
    fn append(&mut self, row: RowDescriptor);
}

/// Renders a snapshot into row descriptors, one per record, in order.
pub fn render(snapshot: &Snapshot) -> Vec<RowDescriptor> {
    snapshot.iter().map(RowDescriptor::from_record).collect()
}

/// Replaces the container's children with `rows`.
pub fn apply<C: Container + ?Sized>(container: &mut C, rows: Vec<RowDescriptor>) {
    container.clear();
    for row in rows {
        container.append(row);
    }
}

/// Formats a change percentage with exactly two decimals and a `%` suffix.
///
/// See [`number::to_fixed`] for the rounding rules.
pub fn format_change(change_percent: f64) -> String {
    format!("{}%", number::to_fixed(change_percent, 2))
}
