//! HTTP client for the Upbit quotation REST API.
//!
//! One method per endpoint. Every method validates its arguments against
//! the cached market list, builds the query string, issues a single GET
//! and returns the decoded JSON body verbatim. No retries, no response
//! caching, no rate limiting.

use crate::error::{UpbitError, UpbitResult};
use crate::markets::MarketList;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

/// Production quotation endpoint.
pub const BASE_URL: &str = "https://api.upbit.com/v1";

/// Candle widths accepted by `/candles/minutes/{unit}`, in minutes.
pub const MINUTE_UNITS: [u32; 8] = [1, 3, 5, 10, 15, 30, 60, 240];

/// Default timeout for API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// API credentials. Unused by the quotation endpoints; reserved for the
/// private (exchange) API.
#[derive(Clone, Default)]
pub struct Credentials {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key.as_deref().map(|_| "<redacted>"))
            .field("secret_key", &self.secret_key.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Client for the Upbit quotation API.
///
/// Construction fetches `/market/all` once and caches the market codes;
/// the cache is never refreshed for the lifetime of the client.
#[derive(Debug)]
pub struct UpbitClient {
    client: Client,
    base_url: String,
    #[allow(dead_code)]
    credentials: Credentials,
    markets: MarketList,
}

impl UpbitClient {
    /// Create a client against the production endpoint.
    ///
    /// Fails with the underlying error if the initial market-list fetch
    /// fails; no retry is attempted.
    pub async fn new(credentials: Credentials) -> UpbitResult<Self> {
        Self::with_base_url(BASE_URL, credentials).await
    }

    /// Create a client against an alternate base URL (no trailing slash).
    pub async fn with_base_url(
        base_url: impl Into<String>,
        credentials: Credentials,
    ) -> UpbitResult<Self> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        let base_url = base_url.into();

        let body = get_json(&client, &base_url, "/market/all", &[]).await?;
        let markets = MarketList::from_market_all(&body)?;
        info!(count = markets.len(), "Loaded tradable market list");

        Ok(Self {
            client,
            base_url,
            credentials,
            markets,
        })
    }

    /// Market codes cached at construction.
    pub fn markets(&self) -> &MarketList {
        &self.markets
    }

    /// GET `/market/all` — every market the exchange currently lists.
    pub async fn get_market_all(&self) -> UpbitResult<Value> {
        self.get("/market/all", &[]).await
    }

    /// GET `/candles/minutes/{unit}`.
    ///
    /// # Arguments
    /// * `unit` - candle width in minutes; one of [`MINUTE_UNITS`].
    /// * `market` - market code, must be in the cached list.
    /// * `to` - last candle time, exclusive (`yyyy-MM-dd'T'HH:mm:ssXXX`).
    /// * `count` - number of candles (server caps at 200).
    pub async fn get_minutes_candles(
        &self,
        unit: u32,
        market: &str,
        to: Option<&str>,
        count: Option<u32>,
    ) -> UpbitResult<Value> {
        if !MINUTE_UNITS.contains(&unit) {
            let msg = format!("invalid unit: {unit}");
            error!(%msg, "Rejecting minutes-candles request");
            return Err(UpbitError::InvalidArgument(msg));
        }
        self.check_market(market)?;

        let params = candle_params(market, to, count);
        self.get(&format!("/candles/minutes/{unit}"), &params).await
    }

    /// GET `/candles/days`.
    ///
    /// `converting_price_unit` converts the closing price into another
    /// quote currency (e.g. `KRW` for BTC-quoted markets).
    pub async fn get_days_candles(
        &self,
        market: &str,
        to: Option<&str>,
        count: Option<u32>,
        converting_price_unit: Option<&str>,
    ) -> UpbitResult<Value> {
        self.check_market(market)?;

        let mut params = candle_params(market, to, count);
        if let Some(unit) = converting_price_unit {
            params.push(("convertingPriceUnit", unit.to_string()));
        }
        self.get("/candles/days", &params).await
    }

    /// GET `/candles/weeks`.
    pub async fn get_weeks_candles(
        &self,
        market: &str,
        to: Option<&str>,
        count: Option<u32>,
    ) -> UpbitResult<Value> {
        self.check_market(market)?;
        self.get("/candles/weeks", &candle_params(market, to, count))
            .await
    }

    /// GET `/candles/months`.
    pub async fn get_months_candles(
        &self,
        market: &str,
        to: Option<&str>,
        count: Option<u32>,
    ) -> UpbitResult<Value> {
        self.check_market(market)?;
        self.get("/candles/months", &candle_params(market, to, count))
            .await
    }

    /// GET `/trades/ticks` — most recent executed trades.
    ///
    /// `cursor` is the `sequential_id` continuation token from a previous
    /// page.
    pub async fn get_trades_ticks(
        &self,
        market: &str,
        to: Option<&str>,
        count: Option<u32>,
        cursor: Option<&str>,
    ) -> UpbitResult<Value> {
        self.check_market(market)?;

        let mut params = candle_params(market, to, count);
        if let Some(cursor) = cursor {
            params.push(("cursor", cursor.to_string()));
        }
        self.get("/trades/ticks", &params).await
    }

    /// GET `/ticker` — current snapshot for one or more markets.
    ///
    /// The slice must be non-empty and every code must be in the cached
    /// list. Codes are joined into a single comma-separated query value.
    pub async fn get_ticker<S: AsRef<str>>(&self, markets: &[S]) -> UpbitResult<Value> {
        if markets.is_empty() {
            let msg = "markets must be a non-empty list".to_string();
            error!(%msg, "Rejecting ticker request");
            return Err(UpbitError::InvalidArgument(msg));
        }
        for market in markets {
            self.check_market(market.as_ref())?;
        }

        let joined = markets
            .iter()
            .map(|m| m.as_ref())
            .collect::<Vec<_>>()
            .join(", ");
        self.get("/ticker", &[("markets", joined)]).await
    }

    /// Reject any market code absent from the cached list.
    fn check_market(&self, market: &str) -> UpbitResult<()> {
        if self.markets.contains(market) {
            Ok(())
        } else {
            let msg = format!("invalid market: {market}");
            error!(%msg, "Market not in cached list");
            Err(UpbitError::InvalidArgument(msg))
        }
    }

    async fn get(&self, path: &str, params: &[(&str, String)]) -> UpbitResult<Value> {
        get_json(&self.client, &self.base_url, path, params).await
    }
}

/// Common query parameters shared by the candle and trade endpoints.
fn candle_params(market: &str, to: Option<&str>, count: Option<u32>) -> Vec<(&'static str, String)> {
    let mut params = vec![("market", market.to_string())];
    if let Some(to) = to {
        params.push(("to", to.to_string()));
    }
    if let Some(count) = count {
        params.push(("count", count.to_string()));
    }
    params
}

/// Shared GET helper.
///
/// Any status outside 200/201 is a failure; the error message carries the
/// response body when the server sent one, else the status code. A 2xx
/// body that is not valid JSON surfaces as a decode error.
async fn get_json(
    client: &Client,
    base_url: &str,
    path: &str,
    params: &[(&str, String)],
) -> UpbitResult<Value> {
    let url = format!("{base_url}{path}");
    debug!(%url, "GET");

    let mut request = client.get(&url);
    if !params.is_empty() {
        request = request.query(params);
    }
    let response = request.send().await?;

    let status = response.status().as_u16();
    let text = response.text().await?;

    if !matches!(status, 200 | 201) {
        let msg = if text.is_empty() {
            format!("status code {status}")
        } else {
            text
        };
        error!(%url, status, "GET failed: {msg}");
        return Err(UpbitError::RequestFailed(msg));
    }

    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candle_params_omits_absent_options() {
        let params = candle_params("KRW-BTC", None, None);
        assert_eq!(params, [("market", "KRW-BTC".to_string())]);
    }

    #[test]
    fn test_candle_params_includes_to_and_count() {
        let params = candle_params("KRW-BTC", Some("2026-01-01T00:00:00Z"), Some(200));
        assert_eq!(
            params,
            [
                ("market", "KRW-BTC".to_string()),
                ("to", "2026-01-01T00:00:00Z".to_string()),
                ("count", "200".to_string()),
            ]
        );
    }

    #[test]
    fn test_credentials_debug_redacts_keys() {
        let creds = Credentials {
            access_key: Some("abcdef".to_string()),
            secret_key: Some("123456".to_string()),
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("abcdef"));
        assert!(!rendered.contains("123456"));
    }
}
