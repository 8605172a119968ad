/*
[INPUT]:  Currency codes (base and counter)
[OUTPUT]: Market data (last price, ticker, trades, depth) as JSON
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use serde_json::Value;

use crate::http::{Result, ZaifClient, ZaifError};
use crate::types::currency_pair;

impl ZaifClient {
    /// Last traded price of `currency_code` / `counter_currency_code`
    ///
    /// GET /api/1/last_price/{base}_{counter}
    pub async fn get_last_price(
        &self,
        currency_code: &str,
        counter_currency_code: &str,
    ) -> Result<Value> {
        let endpoint = market_endpoint("last_price", currency_code, counter_currency_code)?;
        self.call_public_with(&endpoint, |mut json, body| {
            match json.get_mut("last_price") {
                Some(price) => Ok(price.take()),
                None => Err(ZaifError::MalformedResponse {
                    body: body.to_string(),
                }),
            }
        })
        .await
    }

    /// GET /api/1/ticker/{base}_{counter}
    pub async fn get_ticker(
        &self,
        currency_code: &str,
        counter_currency_code: &str,
    ) -> Result<Value> {
        let endpoint = market_endpoint("ticker", currency_code, counter_currency_code)?;
        self.call_public(&endpoint).await
    }

    /// GET /api/1/trades/{base}_{counter}
    pub async fn get_trades(
        &self,
        currency_code: &str,
        counter_currency_code: &str,
    ) -> Result<Value> {
        let endpoint = market_endpoint("trades", currency_code, counter_currency_code)?;
        self.call_public(&endpoint).await
    }

    /// Order book depth
    ///
    /// GET /api/1/depth/{base}_{counter}
    pub async fn get_depth(
        &self,
        currency_code: &str,
        counter_currency_code: &str,
    ) -> Result<Value> {
        let endpoint = market_endpoint("depth", currency_code, counter_currency_code)?;
        self.call_public(&endpoint).await
    }
}

/// `{kind}/{base}_{counter}`; codes end up in the URL path, so only
/// `[a-z0-9]+` is accepted after lower-casing.
fn market_endpoint(kind: &str, currency_code: &str, counter_currency_code: &str) -> Result<String> {
    for code in [currency_code, counter_currency_code] {
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ZaifError::InvalidArgument(format!(
                "invalid currency code: {code:?}"
            )));
        }
    }
    Ok(format!(
        "{kind}/{}",
        currency_pair(currency_code, counter_currency_code)
    ))
}
