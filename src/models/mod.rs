//! Wire models for the real-time quote feed.
//!
//! Every server-sent `message` event carries a JSON array of
//! [`StockRecord`]s. The array is decoded into a [`Snapshot`], which is
//! rendered once and then dropped; nothing is carried over between
//! messages.

pub mod stock;

use serde::Deserialize;

use crate::error::DecodeError;

pub use stock::StockRecord;

/// The complete, ordered set of records delivered by one message.
///
/// Insertion order is display order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub records: Vec<StockRecord>,
}

impl Snapshot {
    pub fn new(records: Vec<StockRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StockRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a StockRecord;
    type IntoIter = std::slice::Iter<'a, StockRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Decodes one message payload into a [`Snapshot`].
///
/// Every record must carry all four fields with the right JSON types and a
/// non-empty `stock_code`; unknown fields are ignored.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] if the payload is not a JSON array of
/// well-formed records, or [`DecodeError::EmptyCode`] for a record whose
/// code is empty.
pub fn decode_snapshot(payload: &str) -> Result<Snapshot, DecodeError> {
    let snapshot: Snapshot = serde_json::from_str(payload)?;

    if let Some(index) = snapshot.iter().position(|r| r.code.is_empty()) {
        return Err(DecodeError::EmptyCode { index });
    }

    Ok(snapshot)
}
