/*
[INPUT]:  Order, withdrawal and history parameters
[OUTPUT]: `return` payloads of the spot trading API
[POS]:    HTTP layer - trading endpoints (require token or key/secret)
[UPDATE]: When adding new trading endpoints or changing parameters
*/

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::{PrivateApi, Result, ZaifClient};
use crate::types::{HistoryQuery, RequestParams, TradeAction, TradeRequest};

impl ZaifClient {
    /// Balances, permissions and counters of the account
    ///
    /// POST /tapi method=get_info
    pub async fn get_info(&self) -> Result<Value> {
        self.call_private(PrivateApi::Trade, "get_info", RequestParams::new())
            .await
    }

    /// Lightweight variant of `get_info`
    ///
    /// POST /tapi method=get_info2
    pub async fn get_info2(&self) -> Result<Value> {
        self.call_private(PrivateApi::Trade, "get_info2", RequestParams::new())
            .await
    }

    /// Own trade history, keyed by trade id
    ///
    /// POST /tapi method=trade_history
    pub async fn get_my_trades(&self, query: &HistoryQuery) -> Result<Value> {
        self.call_private(PrivateApi::Trade, "trade_history", query.to_params())
            .await
    }

    /// Own open orders, optionally for one currency pair
    ///
    /// POST /tapi method=active_orders
    pub async fn get_active_orders(&self, currency_pair: Option<&str>) -> Result<Value> {
        let mut params = RequestParams::new();
        params.insert_opt("currency_pair", currency_pair);
        self.call_private(PrivateApi::Trade, "active_orders", params)
            .await
    }

    /// POST /tapi method=trade
    pub async fn trade(&self, request: &TradeRequest) -> Result<Value> {
        self.call_private(PrivateApi::Trade, "trade", request.to_params())
            .await
    }

    /// Buy `amount` of `currency_code` at `price`
    pub async fn bid(
        &self,
        currency_code: &str,
        price: Decimal,
        amount: Decimal,
        limit: Option<Decimal>,
        counter_currency_code: &str,
    ) -> Result<Value> {
        let request = order(currency_code, TradeAction::Bid, price, amount, limit, counter_currency_code);
        self.trade(&request).await
    }

    /// Sell `amount` of `currency_code` at `price`
    pub async fn ask(
        &self,
        currency_code: &str,
        price: Decimal,
        amount: Decimal,
        limit: Option<Decimal>,
        counter_currency_code: &str,
    ) -> Result<Value> {
        let request = order(currency_code, TradeAction::Ask, price, amount, limit, counter_currency_code);
        self.trade(&request).await
    }

    /// POST /tapi method=cancel_order
    pub async fn cancel(&self, order_id: u64) -> Result<Value> {
        let params = RequestParams::new().with("order_id", order_id);
        self.call_private(PrivateApi::Trade, "cancel_order", params)
            .await
    }

    /// Withdraw funds to an external address.
    ///
    /// `extra` carries optional fields such as `message` or `opt_fee`.
    ///
    /// POST /tapi method=withdraw
    pub async fn withdraw(
        &self,
        currency_code: &str,
        address: &str,
        amount: Decimal,
        extra: RequestParams,
    ) -> Result<Value> {
        let mut params = extra;
        params.insert("currency", currency_code);
        params.insert("address", address);
        params.insert("amount", amount);
        self.call_private(PrivateApi::Trade, "withdraw", params)
            .await
    }

    /// POST /tapi method=withdraw_history
    pub async fn withdraw_history(&self, currency: &str, query: &HistoryQuery) -> Result<Value> {
        let mut params = query.to_params();
        params.insert("currency", currency);
        self.call_private(PrivateApi::Trade, "withdraw_history", params)
            .await
    }

    /// POST /tapi method=deposit_history
    pub async fn deposit_history(&self, currency: &str, query: &HistoryQuery) -> Result<Value> {
        let mut params = query.to_params();
        params.insert("currency", currency);
        self.call_private(PrivateApi::Trade, "deposit_history", params)
            .await
    }
}

fn order(
    currency_code: &str,
    action: TradeAction,
    price: Decimal,
    amount: Decimal,
    limit: Option<Decimal>,
    counter_currency_code: &str,
) -> TradeRequest {
    TradeRequest {
        limit,
        ..TradeRequest::new(currency_code, action, price, amount)
            .with_counter_currency(counter_currency_code)
    }
}
