//! Tradable market list.
//!
//! Populated once from `/market/all` when the client is constructed and
//! read-only afterward. Symbol arguments on every endpoint method are
//! checked against this list before a request goes out.

use crate::error::UpbitResult;
use serde::Deserialize;
use serde_json::Value;

/// Raw entry from the `/market/all` response. Only the market code is
/// kept; korean_name, english_name and warnings are ignored.
#[derive(Debug, Deserialize)]
struct RawMarketEntry {
    market: String,
}

/// Ordered list of tradable market codes (e.g. `KRW-BTC`).
#[derive(Debug, Clone)]
pub struct MarketList {
    codes: Vec<String>,
}

impl MarketList {
    /// Extract market codes from a decoded `/market/all` response body.
    ///
    /// The body must be a JSON array of objects each carrying a `market`
    /// field; anything else is a decode error.
    pub fn from_market_all(body: &Value) -> UpbitResult<Self> {
        let entries: Vec<RawMarketEntry> = serde_json::from_value(body.clone())?;
        let codes = entries.into_iter().map(|e| e.market).collect();
        Ok(Self { codes })
    }

    /// Exact-match membership check.
    pub fn contains(&self, market: &str) -> bool {
        self.codes.iter().any(|c| c == market)
    }

    /// All cached codes, in server order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
