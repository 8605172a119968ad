/*
[INPUT]:  Position type and history options
[OUTPUT]: `return` payloads of the leverage trading API
[POS]:    HTTP layer - leverage endpoints (separate base URL, same signing)
[UPDATE]: When adding leverage endpoints
*/

use serde_json::Value;

use crate::http::{PrivateApi, Result, ZaifClient};
use crate::types::{HistoryQuery, PositionType};

impl ZaifClient {
    /// POST /tlapi method=get_positions
    pub async fn get_positions(
        &self,
        position_type: PositionType,
        query: &HistoryQuery,
    ) -> Result<Value> {
        let mut params = query.to_params();
        params.insert("type", position_type);
        self.call_private(PrivateApi::LeverageTrade, "get_positions", params)
            .await
    }
}
