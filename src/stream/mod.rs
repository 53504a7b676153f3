//! Receive-only server-sent event client.
//!
//! This module is organized by layer:
//! - [`parser`] - Byte-level `text/event-stream` framing
//! - [`connection`] - Long-lived connection task feeding the UI loop
//!
//! [`connect`] opens the HTTP response and wraps its body in an
//! [`EventStream`] that yields parsed events one at a time.

pub mod connection;
pub mod parser;

use std::collections::VecDeque;
use std::pin::Pin;

use futures_util::{Stream, StreamExt};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use tracing::{debug, info};

use crate::error::TransportError;

pub use connection::StreamConnection;
pub use parser::{EventParser, SseEvent};

/// Media type every event stream response must carry.
pub const EVENT_STREAM_MIME: &str = "text/event-stream";

/// Response body of an event stream as owned byte chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = reqwest::Result<Vec<u8>>> + Send>>;

/// Read half of an open event stream.
pub type SseReader = EventStream<ByteStream>;

/// Adapts a stream of byte chunks into a stream of [`SseEvent`]s.
pub struct EventStream<S> {
    inner: S,
    parser: EventParser,
    pending: VecDeque<SseEvent>,
    finished: bool,
}

impl<S, B, E> EventStream<S>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: Into<TransportError>,
{
    pub fn new(inner: S) -> Self {
        Self::with_parser(inner, EventParser::new())
    }

    /// Wraps `inner` using a preconfigured parser.
    pub fn with_parser(inner: S, parser: EventParser) -> Self {
        Self {
            inner,
            parser,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Waits for the next complete event.
    ///
    /// Returns `None` once the body has ended; a partially received event
    /// at that point is discarded. After an error, including an oversized
    /// line, the stream is finished.
    pub async fn next_event(&mut self) -> Option<Result<SseEvent, TransportError>> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(Ok(event));
            }

            if self.finished {
                return None;
            }

            match self.inner.next().await {
                Some(Ok(chunk)) => {
                    let retry_before = self.parser.retry();
                    let events = match self.parser.feed(chunk.as_ref()) {
                        Ok(events) => events,
                        Err(e) => {
                            self.finished = true;
                            return Some(Err(e));
                        }
                    };
                    if let Some(retry) = self.parser.retry()
                        && self.parser.retry() != retry_before
                    {
                        // Recorded only; the stream is never reopened.
                        debug!(retry_ms = retry.as_millis() as u64, "Server announced retry interval");
                    }
                    self.pending.extend(events);
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.finished = true;
                }
            }
        }
    }
}

/// Opens an event stream at `url`.
///
/// # Errors
///
/// Returns a [`TransportError`] if the request fails, the status is not
/// `200 OK`, or the response is not `text/event-stream`.
pub async fn connect(client: &reqwest::Client, url: &str) -> Result<SseReader, TransportError> {
    let response = client
        .get(url)
        .header(ACCEPT, EVENT_STREAM_MIME)
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(TransportError::Status(status));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    if !content_type.as_deref().is_some_and(is_event_stream) {
        return Err(TransportError::ContentType(content_type));
    }

    info!(url, "Event stream opened");

    let body: ByteStream = Box::pin(
        response
            .bytes_stream()
            .map(|chunk| chunk.map(|bytes| bytes.to_vec())),
    );

    Ok(EventStream::new(body))
}

/// Checks the media type, ignoring parameters such as `charset`.
fn is_event_stream(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(EVENT_STREAM_MIME))
}

#[cfg(test)]
mod tests {
    use futures_util::stream;

    use super::*;

    fn chunks(
        parts: &[&'static str],
    ) -> impl Stream<Item = Result<&'static [u8], TransportError>> + Unpin {
        let parts: Vec<Result<&'static [u8], TransportError>> =
            parts.iter().copied().map(|p| Ok(p.as_bytes())).collect();
        stream::iter(parts)
    }

    #[test]
    fn accepts_event_stream_with_charset() {
        assert!(is_event_stream("text/event-stream"));
        assert!(is_event_stream("text/event-stream; charset=utf-8"));
        assert!(is_event_stream("Text/Event-Stream"));
        assert!(!is_event_stream("application/json"));
    }

    #[tokio::test]
    async fn yields_events_across_chunks_then_ends() {
        let mut events =
            EventStream::new(chunks(&["data: 1\n", "\ndata: 2\n\n", "data: partial\n"]));

        assert_eq!(events.next_event().await.unwrap().unwrap().data, "1");
        assert_eq!(events.next_event().await.unwrap().unwrap().data, "2");
        assert!(events.next_event().await.is_none());
        assert!(events.next_event().await.is_none());
    }

    #[tokio::test]
    async fn error_finishes_the_stream() {
        let parts: Vec<Result<&'static [u8], TransportError>> = vec![
            Ok(b"data: 1\n\n".as_slice()),
            Err(TransportError::Closed),
            Ok(b"data: 2\n\n".as_slice()),
        ];
        let mut events = EventStream::new(stream::iter(parts));

        assert_eq!(events.next_event().await.unwrap().unwrap().data, "1");
        assert!(matches!(
            events.next_event().await,
            Some(Err(TransportError::Closed))
        ));
        assert!(events.next_event().await.is_none());
    }

    #[tokio::test]
    async fn oversized_line_finishes_the_stream() {
        let mut events = EventStream::with_parser(
            chunks(&["data: 1\n\n", "data: 0123456789", "\n\ndata: 2\n\n"]),
            EventParser::with_line_limit(12),
        );

        assert_eq!(events.next_event().await.unwrap().unwrap().data, "1");
        assert!(matches!(
            events.next_event().await,
            Some(Err(TransportError::LineTooLong { limit: 12 }))
        ));
        assert!(events.next_event().await.is_none());
    }
}
