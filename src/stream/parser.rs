//! Incremental `text/event-stream` parser.
//!
//! Bytes arrive in arbitrary chunks; [`EventParser::feed`] buffers partial
//! lines and returns every event completed by the chunk. Field handling
//! follows the event-stream interpretation rules used by browser
//! `EventSource` implementations.

use std::time::Duration;

use crate::error::TransportError;

/// Longest line buffered while waiting for a line break.
pub const MAX_LINE_LEN: usize = 4 * 1024 * 1024;

/// Event type used when a block carries no `event:` field.
pub const DEFAULT_EVENT: &str = "message";

/// One dispatched server-sent event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SseEvent {
    /// Event type, [`DEFAULT_EVENT`] unless the server named it.
    pub event: String,
    /// `data:` lines joined with `\n`.
    pub data: String,
    /// Last event id seen on the stream, if any.
    pub id: Option<String>,
}

impl SseEvent {
    /// Returns `true` for unnamed events, the only ones the feed uses.
    pub fn is_message(&self) -> bool {
        self.event == DEFAULT_EVENT
    }
}

/// Stateful parser for one event stream.
#[derive(Debug)]
pub struct EventParser {
    line: Vec<u8>,
    max_line: usize,
    /// Previous byte was a CR, so an immediately following LF is swallowed.
    after_cr: bool,
    started: bool,
    event_type: String,
    data: String,
    last_event_id: String,
    retry: Option<Duration>,
}

impl Default for EventParser {
    fn default() -> Self {
        Self::with_line_limit(MAX_LINE_LEN)
    }
}

impl EventParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser that refuses lines longer than `max_line` bytes.
    pub fn with_line_limit(max_line: usize) -> Self {
        Self {
            line: Vec::new(),
            max_line,
            after_cr: false,
            started: false,
            event_type: String::new(),
            data: String::new(),
            last_event_id: String::new(),
            retry: None,
        }
    }

    /// Reconnection delay last announced by the server.
    pub fn retry(&self) -> Option<Duration> {
        self.retry
    }

    /// Feeds a chunk of the response body and returns completed events.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::LineTooLong`] once the unterminated line
    /// grows past the limit. Events completed earlier in the same chunk are
    /// dropped with it; the stream is unusable afterwards.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<SseEvent>, TransportError> {
        let mut events = Vec::new();

        for &byte in chunk {
            match byte {
                b'\n' if self.after_cr => self.after_cr = false,
                b'\n' | b'\r' => {
                    self.after_cr = byte == b'\r';
                    let line = std::mem::take(&mut self.line);
                    if let Some(event) = self.process_line(&line) {
                        events.push(event);
                    }
                }
                _ => {
                    self.after_cr = false;
                    if self.line.len() >= self.max_line {
                        return Err(TransportError::LineTooLong {
                            limit: self.max_line,
                        });
                    }
                    self.line.push(byte);
                }
            }
        }

        Ok(events)
    }

    fn process_line(&mut self, raw: &[u8]) -> Option<SseEvent> {
        let decoded = String::from_utf8_lossy(raw);
        let mut line: &str = &decoded;

        if !self.started {
            self.started = true;
            line = line.strip_prefix('\u{feff}').unwrap_or(line);
        }

        if line.is_empty() {
            return self.dispatch();
        }

        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "event" => self.event_type = value.to_string(),
            "data" => {
                self.data.push_str(value);
                self.data.push('\n');
            }
            "id" if !value.contains('\0') => self.last_event_id = value.to_string(),
            "retry" if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
                if let Ok(ms) = value.parse::<u64>() {
                    self.retry = Some(Duration::from_millis(ms));
                }
            }
            _ => {}
        }

        None
    }

    fn dispatch(&mut self) -> Option<SseEvent> {
        let event_type = std::mem::take(&mut self.event_type);

        if self.data.is_empty() {
            return None;
        }

        let mut data = std::mem::take(&mut self.data);
        if data.ends_with('\n') {
            data.pop();
        }

        Some(SseEvent {
            event: if event_type.is_empty() {
                DEFAULT_EVENT.to_string()
            } else {
                event_type
            },
            data,
            id: (!self.last_event_id.is_empty()).then(|| self.last_event_id.clone()),
        })
    }
}
