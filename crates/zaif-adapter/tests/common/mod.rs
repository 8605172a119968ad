/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for zaif-adapter tests

use std::time::Duration;

use wiremock::{MockServer, Request};
use zaif_adapter::{ClientConfig, ZaifClient};

pub const TEST_API_KEY: &str = "0a1b2c3d-test-key";
pub const TEST_API_SECRET: &str = "5e6f7a8b-test-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Config pointing every endpoint family at the mock server
pub fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_base_url(&server.uri())
        .without_cool_down()
}

/// Client with a key/secret pair and no cool-down
#[allow(dead_code)]
pub fn signed_client(server: &MockServer) -> ZaifClient {
    let mut client = ZaifClient::with_config(mock_config(server)).expect("client init");
    client.set_api_key(TEST_API_KEY, TEST_API_SECRET);
    client
}

#[allow(dead_code)]
pub fn cooled_client(server: &MockServer, cool_down: Duration) -> ZaifClient {
    let config = ClientConfig {
        cool_down: true,
        cool_down_time: cool_down,
        ..mock_config(server)
    };
    ZaifClient::with_config(config).expect("client init")
}

/// Decoded form fields of a captured request body
#[allow(dead_code)]
pub fn form_fields(request: &Request) -> Vec<(String, String)> {
    url::form_urlencoded::parse(&request.body)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect()
}

#[allow(dead_code)]
pub fn form_field(request: &Request, name: &str) -> Option<String> {
    form_fields(request)
        .into_iter()
        .find(|(field, _)| field == name)
        .map(|(_, value)| value)
}

#[allow(dead_code)]
pub fn header_str<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|value| value.to_str().ok())
}

/// Successful private envelope around `payload`
#[allow(dead_code)]
pub fn success_envelope(payload: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "success": 1, "return": payload })
}
