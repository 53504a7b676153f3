//! Application state for the TUI.

use crate::controller::StreamController;
use crate::view::StockList;

/// Central application state container.
pub struct App {
    /// Controller owning the `stock-list` container and its stream.
    pub controller: StreamController<StockList>,
    /// Highlighted row in the stock table.
    pub selected: Option<usize>,
    /// Detail popup, when open.
    pub detail: Option<DetailView>,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App around an (idle or started) controller.
    pub fn new(controller: StreamController<StockList>) -> Self {
        Self {
            controller,
            selected: None,
            detail: None,
            should_quit: false,
        }
    }

    /// Rows currently displayed.
    pub fn stock_list(&self) -> &StockList {
        self.controller.container()
    }

    /// Code of the highlighted row.
    pub fn selected_code(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.stock_list().rows().get(i))
            .map(|row| row.code.as_str())
    }

    /// Moves the selection down one row, stopping at the last.
    pub fn select_next(&mut self) {
        let len = self.stock_list().len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        });
    }

    /// Moves the selection up one row, stopping at the first.
    pub fn select_previous(&mut self) {
        if self.stock_list().is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Keeps the selection inside the current rows after a re-render.
    pub fn clamp_selection(&mut self) {
        let len = self.stock_list().len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }

    /// Opens the detail popup in its loading state.
    pub fn open_detail(&mut self, code: String) {
        self.detail = Some(DetailView {
            code,
            body: DetailBody::Loading,
        });
    }

    /// Stores a detail result if the popup is still showing that stock.
    pub fn set_detail(&mut self, code: &str, body: DetailBody) {
        if let Some(detail) = self.detail.as_mut()
            && detail.code == code
        {
            detail.body = body;
        }
    }
}

/// Detail popup for one stock.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailView {
    pub code: String,
    pub body: DetailBody,
}

/// Content of the detail popup.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailBody {
    Loading,
    Found(serde_json::Value),
    NotFound,
    Failed(String),
}
