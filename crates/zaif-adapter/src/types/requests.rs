/*
[INPUT]:  Endpoint-specific arguments from wrapper callers
[OUTPUT]: Ordered request params for the private pipeline
[POS]:    Data layer - request types for private endpoints
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{SortOrder, TradeAction};
use super::params::RequestParams;

/// Counter currency used when none is given
pub const DEFAULT_COUNTER_CURRENCY: &str = "jpy";

/// `{base}_{counter}` in lower case
pub fn currency_pair(currency_code: &str, counter_currency_code: &str) -> String {
    format!(
        "{}_{}",
        currency_code.to_lowercase(),
        counter_currency_code.to_lowercase()
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub currency_code: String,
    pub counter_currency_code: String,
    pub action: TradeAction,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Limit price attached to the order
    #[serde(default, with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Decimal>,
}

impl TradeRequest {
    /// Order against the default counter currency
    pub fn new(currency_code: &str, action: TradeAction, price: Decimal, amount: Decimal) -> Self {
        Self {
            currency_code: currency_code.to_string(),
            counter_currency_code: DEFAULT_COUNTER_CURRENCY.to_string(),
            action,
            price,
            amount,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Decimal) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_counter_currency(mut self, counter_currency_code: &str) -> Self {
        self.counter_currency_code = counter_currency_code.to_string();
        self
    }

    pub fn to_params(&self) -> RequestParams {
        let mut params = RequestParams::new()
            .with(
                "currency_pair",
                currency_pair(&self.currency_code, &self.counter_currency_code),
            )
            .with("action", self.action)
            .with("price", self.price)
            .with("amount", self.amount);
        params.insert_opt("limit", self.limit);
        params
    }
}

/// Paging and filtering options shared by the history endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    /// Unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_pair: Option<String>,
}

impl HistoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn since(mut self, since: i64) -> Self {
        self.since = Some(since);
        self
    }

    pub fn currency_pair(mut self, currency_code: &str, counter_currency_code: &str) -> Self {
        self.currency_pair = Some(currency_pair(currency_code, counter_currency_code));
        self
    }

    pub fn to_params(&self) -> RequestParams {
        let mut params = RequestParams::new();
        params.insert_opt("from", self.from);
        params.insert_opt("count", self.count);
        params.insert_opt("from_id", self.from_id);
        params.insert_opt("end_id", self.end_id);
        params.insert_opt("order", self.order);
        params.insert_opt("since", self.since);
        params.insert_opt("end", self.end);
        params.insert_opt("currency_pair", self.currency_pair.as_deref());
        params
    }
}
