//! Client for the Upbit quotation (public market data) REST API.
//!
//! The quotation API is unauthenticated and read-only:
//! - `UpbitClient`: one method per endpoint (market list, candles,
//!   trade ticks, ticker snapshots)
//! - `MarketList`: tradable market codes fetched once at construction
//!   and used to validate every symbol argument
//!
//! Responses are returned as raw `serde_json::Value` arrays; the client
//! does not model the record fields.

pub mod client;
pub mod error;
pub mod markets;

pub use client::{Credentials, UpbitClient, BASE_URL, MINUTE_UNITS};
pub use error::{UpbitError, UpbitResult};
pub use markets::MarketList;
