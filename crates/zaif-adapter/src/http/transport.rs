/*
[INPUT]:  Target URL, optional signed body and auth headers
[OUTPUT]: Raw HTTP status and body (no payload interpretation)
[POS]:    HTTP layer - TLS request/response exchange
[UPDATE]: When changing request construction or connection handling
*/

use reqwest::{RequestBuilder, Url};
use tracing::{debug, warn};

use crate::auth::SignedRequest;
use crate::http::response::RawResponse;
use crate::http::{Result, ZaifClient, ZaifError};

impl ZaifClient {
    /// GET without body or extra headers
    pub(crate) async fn get_raw(&self, url: Url) -> Result<RawResponse> {
        debug!(%url, "GET");
        let builder = self.http_client.get(url);
        self.send_raw(builder).await
    }

    /// POST a signed form body
    pub(crate) async fn post_raw(&self, url: Url, signed: SignedRequest) -> Result<RawResponse> {
        debug!(%url, body_len = signed.body.len(), "POST");
        let builder = self
            .http_client
            .post(url)
            .headers(signed.headers)
            .body(signed.body);
        self.send_raw(builder).await
    }

    async fn send_raw(&self, builder: RequestBuilder) -> Result<RawResponse> {
        let response = builder.send().await?;
        let status = response.status();
        // Non-2xx bodies are not read.
        if !status.is_success() {
            warn!(%status, "non-success status");
            return Err(ZaifError::http_status(status));
        }
        let body = response.text().await?;
        debug!(%status, body_len = body.len(), "response received");
        Ok(RawResponse { status, body })
    }
}
