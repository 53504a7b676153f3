use serde::Deserialize;

/// One stock's state at the time of a snapshot.
///
/// Numbers are kept as the IEEE doubles the feed encodes, so any JSON
/// number decodes regardless of magnitude.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StockRecord {
    #[serde(rename = "stock_code")]
    pub code: String,
    #[serde(rename = "stock_name")]
    pub name: String,
    #[serde(rename = "current_price")]
    pub price: f64,
    pub change_percent: f64,
}
