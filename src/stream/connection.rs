//! Event stream connection task.
//!
//! [`StreamConnection`] opens the stream once and forwards every `message`
//! event to the UI loop. Any failure is reported once as
//! [`Message::StreamFailed`] and ends the task; there is no reconnection.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::connect;
use crate::error::TransportError;
use crate::tui::Message;

/// Why the reader loop exited.
enum DisconnectReason {
    /// The stream failed or the server closed it.
    Failed(TransportError),
    /// The message channel to the main loop was closed (app shutting down).
    Shutdown,
}

/// Owns one event stream for its whole lifetime.
pub struct StreamConnection {
    url: String,
    client: reqwest::Client,
    tx: mpsc::UnboundedSender<Message>,
}

impl StreamConnection {
    /// Creates a connection that reports to `tx`.
    #[must_use]
    pub fn new(url: String, client: reqwest::Client, tx: mpsc::UnboundedSender<Message>) -> Self {
        Self { url, client, tx }
    }

    /// Connects and reads until the stream fails or the app shuts down.
    pub async fn run(self) {
        info!(url = %self.url, "Connecting to event stream");

        let mut reader = match connect(&self.client, &self.url).await {
            Ok(reader) => reader,
            Err(e) => {
                warn!(url = %self.url, "Event stream connection failed: {e}");
                let _ = self.tx.send(Message::StreamFailed(e));
                return;
            }
        };

        if self.tx.send(Message::StreamOpened).is_err() {
            return;
        }

        let reason = loop {
            match reader.next_event().await {
                Some(Ok(event)) if event.is_message() => {
                    if self.tx.send(Message::Payload(event.data)).is_err() {
                        break DisconnectReason::Shutdown;
                    }
                }
                Some(Ok(event)) => {
                    debug!(event = %event.event, "Ignoring named event");
                }
                Some(Err(e)) => {
                    warn!("Event stream error: {e}");
                    break DisconnectReason::Failed(e);
                }
                None => {
                    warn!("Event stream ended");
                    break DisconnectReason::Failed(TransportError::Closed);
                }
            }
        };

        match reason {
            DisconnectReason::Failed(e) => {
                let _ = self.tx.send(Message::StreamFailed(e));
            }
            DisconnectReason::Shutdown => {
                info!("Event stream reader shutting down");
            }
        }
    }
}
