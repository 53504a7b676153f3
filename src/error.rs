//! Crate-level error types.
//!
//! [`StockwatchError`] unifies every error source (configuration, terminal,
//! HTTP, event stream, payload decoding) behind a single enum so callers can
//! match on the variant they care about while still using the `?` operator
//! for easy propagation.
//!
//! The two failure kinds of the live feed have their own types:
//! [`DecodeError`] for payloads that do not describe a snapshot and
//! [`TransportError`] for anything that ends the event stream.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StockwatchError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum StockwatchError {
    /// An environment variable held an invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal setup, teardown or log file I/O failed.
    #[error("io error: {0}")]
    Io(String),

    /// A plain HTTP request (not the event stream) failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The event stream failed or ended.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A stream payload was not a valid snapshot.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// A message payload could not be decoded into a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Not JSON, not an array of objects, or a required field is missing or
    /// has the wrong type.
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record carried an empty `stock_code`.
    #[error("record {index} has an empty stock_code")]
    EmptyCode { index: usize },
}

/// The event stream could not be opened or was terminated.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connecting or reading the response body failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with something other than `200 OK`.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// The response was not `text/event-stream`.
    #[error("unexpected content type {0:?}")]
    ContentType(Option<String>),

    /// A line exceeded the parser's buffer limit without a line break.
    #[error("event stream line longer than {limit} bytes")]
    LineTooLong { limit: usize },

    /// The server closed the stream.
    #[error("stream closed by server")]
    Closed,
}
