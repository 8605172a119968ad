/*
[INPUT]:  API method name, request params, nonce and active auth mode
[OUTPUT]: Form-encoded body plus auth headers (token, or Key + Sign)
[POS]:    Auth layer - request signing for private endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use hmac::{Hmac, Mac};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use sha2::Sha512;

use crate::auth::{AuthMode, Nonce};
use crate::http::{Result, ZaifError};
use crate::types::RequestParams;

type HmacSha512 = Hmac<Sha512>;

pub const TOKEN_HEADER: &str = "token";
pub const KEY_HEADER: &str = "key";
pub const SIGN_HEADER: &str = "sign";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body and headers ready to be sent as one POST.
///
/// `body` is exactly the byte sequence the signature covers.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub body: String,
    pub headers: HeaderMap,
}

/// Hex encoded HMAC-SHA512 of `payload` keyed by `secret`
pub fn hmac_sha512_hex(secret: &str, payload: &[u8]) -> Result<String> {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .map_err(|e| ZaifError::Config(format!("Invalid api secret: {e}")))?;
    mac.update(payload);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Build the signed body for a private API call.
///
/// `method` and `nonce` are appended after the caller's params, replacing any
/// caller values under those names.
pub fn sign_request(
    method: &str,
    params: &RequestParams,
    nonce: Nonce,
    auth: AuthMode<'_>,
) -> Result<SignedRequest> {
    let mut form = params.clone();
    form.insert("method", method);
    form.insert("nonce", nonce);
    let body = form.to_form_body();

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));

    match auth {
        AuthMode::Token(token) => {
            headers.insert(HeaderName::from_static(TOKEN_HEADER), header_value(token)?);
        }
        AuthMode::KeyPair(pair) => {
            let sign = hmac_sha512_hex(&pair.api_secret, body.as_bytes())?;
            headers.insert(HeaderName::from_static(KEY_HEADER), header_value(&pair.api_key)?);
            headers.insert(HeaderName::from_static(SIGN_HEADER), header_value(&sign)?);
        }
    }

    Ok(SignedRequest { body, headers })
}

fn header_value(value: &str) -> Result<HeaderValue> {
    let mut header = HeaderValue::from_str(value).map_err(|_| ZaifError::Authentication {
        message: "credential contains characters not allowed in a header".to_string(),
    })?;
    header.set_sensitive(true);
    Ok(header)
}
