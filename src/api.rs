//! REST lookup of a single stock's details.
//!
//! The quote server exposes `GET /api/stock/{code}` next to the event
//! stream. The body shape is owned by the server, so it is returned as raw
//! JSON for display.

use reqwest::{StatusCode, Url};
use tracing::{debug, info};

use crate::Result;

/// Builds `{api_url}/stock/{code}` with `code` encoded as one path segment.
///
/// # Errors
///
/// Returns [`StockwatchError::Config`](crate::StockwatchError::Config) if
/// `api_url` is not a usable base URL.
pub fn detail_url(api_url: &str, code: &str) -> Result<Url> {
    let mut url = Url::parse(api_url)
        .map_err(|e| crate::StockwatchError::Config(format!("invalid API URL {api_url:?}: {e}")))?;

    url.path_segments_mut()
        .map_err(|()| {
            crate::StockwatchError::Config(format!("API URL {api_url:?} cannot be a base"))
        })?
        .pop_if_empty()
        .extend(["stock", code]);

    Ok(url)
}

/// Fetches the detail record for `code`.
///
/// Returns `Ok(None)` when the server does not know the stock.
///
/// # Errors
///
/// Returns a [`StockwatchError`](crate::StockwatchError) if the URL is
/// invalid, the request fails, the server answers with an error status
/// other than `404`, or the body is not JSON.
pub async fn fetch_stock_detail(
    client: &reqwest::Client,
    api_url: &str,
    code: &str,
) -> Result<Option<serde_json::Value>> {
    let url = detail_url(api_url, code)?;
    debug!(%url, "Requesting stock detail");

    let response = client.get(url).send().await?;
    if response.status() == StatusCode::NOT_FOUND {
        info!(code, "Stock not found");
        return Ok(None);
    }

    let response = response.error_for_status()?;
    let body: serde_json::Value = response.json().await?;

    Ok(Some(body))
}
