use super::{Container, RowDescriptor};

/// Identifier of the stock table container.
pub const STOCK_LIST_ID: &str = "stock-list";

/// In-memory stock table drawn by the terminal UI.
#[derive(Clone, Debug, Default)]
pub struct StockList {
    id: String,
    rows: Vec<RowDescriptor>,
}

impl StockList {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[RowDescriptor] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Container for StockList {
    fn id(&self) -> &str {
        &self.id
    }

    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append(&mut self, row: RowDescriptor) {
        self.rows.push(row);
    }
}
