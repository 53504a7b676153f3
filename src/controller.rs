//! Stream-driven controller for the stock list.
//!
//! [`StreamController`] ties one event stream to one [`Container`]. It is
//! constructed idle, opened by [`StreamController::start`], and closed for
//! good by a transport error or [`StreamController::stop`]:
//!
//! ```text
//! Idle --start--> Open --transport error / stop--> Closed
//! ```
//!
//! While open, every message payload is decoded and fully replaces the
//! container's rows. Once closed, payloads are ignored and the last rows
//! stay on screen.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::error::{DecodeError, TransportError};
use crate::models::decode_snapshot;
use crate::stream::StreamConnection;
use crate::tui::Message;
use crate::view::{self, Container};

/// Lifecycle state of a [`StreamController`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControllerState {
    /// Constructed, no connection yet.
    #[default]
    Idle,
    /// Connection task running; payloads are rendered.
    Open,
    /// Terminal; nothing is rendered any more.
    Closed,
}

/// Owns the display container and the connection feeding it.
pub struct StreamController<C> {
    endpoint: String,
    container: C,
    state: ControllerState,
    task: Option<JoinHandle<()>>,
}

impl<C: Container> StreamController<C> {
    /// Creates an idle controller. No I/O happens until [`start`](Self::start).
    pub fn new(endpoint: impl Into<String>, container: C) -> Self {
        Self {
            endpoint: endpoint.into(),
            container,
            state: ControllerState::Idle,
            task: None,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Spawns the connection task and opens the controller.
    ///
    /// Events are queued on `tx`, which exists before the task does, so
    /// nothing sent after the connection opens can be missed. Has no effect
    /// unless the controller is idle. Must be called inside a tokio runtime.
    pub fn start(&mut self, client: reqwest::Client, tx: mpsc::UnboundedSender<Message>) {
        if self.state != ControllerState::Idle {
            debug!(state = ?self.state, "Ignoring start on a non-idle controller");
            return;
        }

        let connection = StreamConnection::new(self.endpoint.clone(), client, tx);
        self.task = Some(tokio::spawn(connection.run()));
        self.state = ControllerState::Open;
        info!(endpoint = %self.endpoint, container = self.container.id(), "Controller started");
    }

    /// Decodes one payload and re-renders the container.
    ///
    /// Payloads arriving while the controller is not open are dropped.
    ///
    /// # Errors
    ///
    /// Returns the [`DecodeError`] for a payload that is not a valid
    /// snapshot; the container is left untouched in that case.
    pub fn handle_message(&mut self, payload: &str) -> Result<(), DecodeError> {
        if self.state != ControllerState::Open {
            debug!(state = ?self.state, "Dropping payload, controller not open");
            return Ok(());
        }

        let snapshot = decode_snapshot(payload)?;
        let rows = view::render(&snapshot);
        debug!(rows = rows.len(), "Rendering snapshot");
        view::apply(&mut self.container, rows);

        Ok(())
    }

    /// Logs a transport failure and closes the controller for good.
    pub fn handle_transport_error(&mut self, err: &TransportError) {
        if self.state != ControllerState::Open {
            debug!(state = ?self.state, "Ignoring transport error, controller not open");
            return;
        }

        error!(endpoint = %self.endpoint, "Event stream failed: {err}");
        self.close();
    }

    /// Closes the connection. The controller cannot be restarted.
    pub fn stop(&mut self) {
        if self.state == ControllerState::Closed {
            return;
        }

        info!(endpoint = %self.endpoint, "Controller stopped");
        self.close();
    }

    fn close(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.state = ControllerState::Closed;
    }
}

impl<C> Drop for StreamController<C> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
