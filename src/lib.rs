//! Live stock table client for a server-sent event quote feed.
//!
//! Provides typed snapshot models, a receive-only event-stream client, a
//! pure snapshot renderer and the controller tying them to a display
//! container, plus the terminal UI that shows that container.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod stream;
pub mod tui;
pub mod view;

pub use error::{DecodeError, Result, StockwatchError, TransportError};
