//! Application configuration loaded from environment variables.
//!
//! Every value has a default matching the local quote server, so running
//! without any variables set connects to `http://localhost:5000`:
//! - `STOCKWATCH_STREAM_URL`: server-sent event endpoint
//! - `STOCKWATCH_API_URL`: base URL of the REST API (stock detail lookup)
//! - `STOCKWATCH_LOG_FILE`: file receiving tracing output
//! - `STOCKWATCH_LOG_LEVEL`: maximum tracing level (`error` .. `trace`)
//! - `STOCKWATCH_TICK_MS`: UI tick interval in milliseconds

use std::path::PathBuf;
use std::str::FromStr;

use tracing::Level;

/// Default server-sent event endpoint.
pub const DEFAULT_STREAM_URL: &str = "http://localhost:5000/api/realtime";

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default log file, relative to the working directory.
const DEFAULT_LOG_FILE: &str = "stockwatch.log";

/// Default UI tick interval.
const DEFAULT_TICK_MS: u64 = 250;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub stream_url: String,
    pub api_url: String,
    pub log_file: PathBuf,
    pub log_level: Level,
    pub tick_ms: u64,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`StockwatchError::Config`](crate::StockwatchError::Config) if a
/// URL does not use `http`/`https`, the log level is unknown, or the tick
/// interval is not a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let stream_url =
        non_empty_var("STOCKWATCH_STREAM_URL").unwrap_or_else(|| DEFAULT_STREAM_URL.to_string());
    require_http("STOCKWATCH_STREAM_URL", &stream_url)?;

    let api_url =
        non_empty_var("STOCKWATCH_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
    require_http("STOCKWATCH_API_URL", &api_url)?;

    let log_file = non_empty_var("STOCKWATCH_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let log_level = match non_empty_var("STOCKWATCH_LOG_LEVEL") {
        Some(value) => Level::from_str(&value).map_err(|_| {
            crate::StockwatchError::Config(format!(
                "STOCKWATCH_LOG_LEVEL has unknown level {value:?}"
            ))
        })?,
        None => Level::INFO,
    };

    let tick_ms = match non_empty_var("STOCKWATCH_TICK_MS") {
        Some(value) => match value.parse::<u64>() {
            Ok(ms) if ms > 0 => ms,
            _ => {
                return Err(crate::StockwatchError::Config(format!(
                    "STOCKWATCH_TICK_MS must be a positive integer, got {value:?}"
                )));
            }
        },
        None => DEFAULT_TICK_MS,
    };

    Ok(AppConfig {
        stream_url,
        api_url,
        log_file,
        log_level,
        tick_ms,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn require_http(name: &str, url: &str) -> crate::Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(crate::StockwatchError::Config(format!(
            "{name} must be an http(s) URL, got {url:?}"
        )))
    }
}
