//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::error::TransportError;

use super::app::{App, DetailBody};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),

    /// Event stream connected.
    StreamOpened,
    /// Data of one `message` event.
    Payload(String),
    /// Event stream failed or ended; sent at most once.
    StreamFailed(TransportError),

    /// Result of a detail lookup.
    Detail {
        code: String,
        result: Result<Option<serde_json::Value>, String>,
    },
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Actions that require external handling (e.g., network requests).
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Look up the details of a stock.
    FetchDetail(String),
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::StreamOpened => {
            info!(endpoint = app.controller.endpoint(), "Receiving quotes");
            None
        }
        Message::Payload(payload) => {
            if let Err(e) = app.controller.handle_message(&payload) {
                error!("Dropping undecodable payload: {e}");
            }
            app.clamp_selection();
            None
        }
        Message::StreamFailed(err) => {
            app.controller.handle_transport_error(&err);
            None
        }
        Message::Detail { code, result } => {
            let body = match result {
                Ok(Some(value)) => DetailBody::Found(value),
                Ok(None) => DetailBody::NotFound,
                Err(e) => DetailBody::Failed(e),
            };
            app.set_detail(&code, body);
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) | Event::Tick => None,
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            None
        }
        KeyCode::Char('q') if key.modifiers.is_empty() => {
            app.should_quit = true;
            None
        }
        KeyCode::Esc => {
            app.detail = None;
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next();
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous();
            None
        }
        KeyCode::Enter => {
            let code = app.selected_code()?.to_string();
            app.open_detail(code.clone());
            Some(Action::FetchDetail(code))
        }
        _ => None,
    }
}
