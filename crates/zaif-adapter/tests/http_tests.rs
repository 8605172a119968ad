/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for transport, classification and cool-down
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use std::time::{Duration, Instant};

use common::{
    cooled_client, form_field, mock_config, setup_mock_server, signed_client, success_envelope,
};
use rust_decimal::Decimal;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_test::assert_ok;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};
use zaif_adapter::{
    ClientConfig, HistoryQuery, PositionType, PrivateApi, RequestParams, SortOrder, ZaifClient,
    ZaifError,
};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(ZaifClient::new());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::default().without_cool_down();
    let _client = assert_ok!(ZaifClient::with_config(config));
}

#[test]
fn test_client_credentials_setters() {
    let mut client = assert_ok!(ZaifClient::new());
    assert!(client.credentials().check_ready().is_err());

    client.set_api_key("key", "secret");
    assert!(client.credentials().key_pair().is_some());
    assert!(client.credentials().token().is_none());

    client.set_token("token");
    assert_eq!(client.credentials().token(), Some("token"));
}

#[tokio::test]
async fn test_private_success_returns_return_field() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/tapi"))
        .and(body_string_contains("method=get_info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(
            json!({"funds": {"jpy": 1000}}),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let info = assert_ok!(client.get_info().await);
    assert_eq!(info, json!({"funds": {"jpy": 1000}}));
}

#[tokio::test]
async fn test_private_failure_is_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/tapi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": 0, "error": "insufficient funds"})),
        )
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let err = client
        .bid("btc", Decimal::from(4_500_000), Decimal::new(1, 2), None, "jpy")
        .await
        .unwrap_err();

    match err {
        ZaifError::Api { message } => assert_eq!(message, "insufficient funds"),
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_trade_sends_order_fields() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/tapi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(
            json!({"received": 0, "remains": 0.01, "order_id": 7}),
        )))
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let result = assert_ok!(
        client
            .ask(
                "MONA",
                "210.5".parse().unwrap(),
                "3".parse().unwrap(),
                Some("200".parse().unwrap()),
                "btc",
            )
            .await
    );
    assert_eq!(result["order_id"], json!(7));

    let requests = server.received_requests().await.expect("recording enabled");
    let request = &requests[0];
    assert_eq!(form_field(request, "currency_pair").as_deref(), Some("mona_btc"));
    assert_eq!(form_field(request, "action").as_deref(), Some("ask"));
    assert_eq!(form_field(request, "price").as_deref(), Some("210.5"));
    assert_eq!(form_field(request, "amount").as_deref(), Some("3"));
    assert_eq!(form_field(request, "limit").as_deref(), Some("200"));
    assert_eq!(form_field(request, "method").as_deref(), Some("trade"));
}

#[tokio::test]
async fn test_history_endpoints_send_currency_and_options() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/tapi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({}))))
        .expect(2)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let query = HistoryQuery::new().count(5).order(SortOrder::Asc);
    assert_ok!(client.withdraw_history("jpy", &query).await);
    assert_ok!(client.deposit_history("btc", &HistoryQuery::new()).await);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(form_field(&requests[0], "method").as_deref(), Some("withdraw_history"));
    assert_eq!(form_field(&requests[0], "currency").as_deref(), Some("jpy"));
    assert_eq!(form_field(&requests[0], "count").as_deref(), Some("5"));
    assert_eq!(form_field(&requests[0], "order").as_deref(), Some("ASC"));
    assert_eq!(form_field(&requests[1], "method").as_deref(), Some("deposit_history"));
    assert_eq!(form_field(&requests[1], "currency").as_deref(), Some("btc"));
    assert_eq!(form_field(&requests[1], "count"), None);
}

#[tokio::test]
async fn test_positions_use_leverage_endpoint() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/tlapi"))
        .and(body_string_contains("type=margin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(
            json!({"1001": {"currency_pair": "btc_jpy", "action": "bid"}}),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tapi"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let positions = assert_ok!(
        client
            .get_positions(PositionType::Margin, &HistoryQuery::new())
            .await
    );
    assert_eq!(positions["1001"]["action"], json!("bid"));
}

#[tokio::test]
async fn test_call_private_passes_arbitrary_method() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/tapi"))
        .and(body_string_contains("method=get_id_info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(
            json!({"user": {"id": 1}}),
        )))
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let value = assert_ok!(
        client
            .call_private(PrivateApi::Trade, "get_id_info", RequestParams::new())
            .await
    );
    assert_eq!(value["user"]["id"], json!(1));
}

#[tokio::test]
async fn test_non_success_status_is_connection_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/tapi"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"success": 0, "error": "maintenance"})),
        )
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let err = client.get_info().await.unwrap_err();

    assert_eq!(err.status().map(|status| status.as_u16()), Some(503));
    match err {
        ZaifError::Connection { message, .. } => assert!(message.contains("503")),
        other => panic!("Expected Connection error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_success_status_survives_truncated_body() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let address = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        let _ = socket
            .write_all(b"HTTP/1.1 502 Bad Gateway\r\nContent-Length: 1000\r\n\r\npartial")
            .await;
        let _ = socket.shutdown().await;
    });

    let config = ClientConfig::default()
        .with_base_url(&format!("http://{address}"))
        .without_cool_down();
    let client = assert_ok!(ZaifClient::with_config(config));
    let err = client.get_ticker("btc", "jpy").await.unwrap_err();

    assert_eq!(err.status().map(|status| status.as_u16()), Some(502));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_unreachable_host_is_connection_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let address = listener.local_addr().expect("local addr");
    drop(listener);
    let config = ClientConfig::default()
        .with_base_url(&format!("http://{address}"))
        .without_cool_down();

    let client = assert_ok!(ZaifClient::with_config(config));
    let err = client.get_ticker("btc", "jpy").await.unwrap_err();

    assert!(matches!(err, ZaifError::Connection { status: None, .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_malformed_body() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/1/ticker/btc_jpy"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = assert_ok!(ZaifClient::with_config(mock_config(&server)));
    let err = client.get_ticker("btc", "jpy").await.unwrap_err();
    match err {
        ZaifError::MalformedResponse { body } => assert_eq!(body, "<html>oops</html>"),
        other => panic!("Expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cool_down_delays_successful_calls() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/1/last_price/btc_jpy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"last_price": 123.4})))
        .mount(&server)
        .await;

    let cool_down = Duration::from_millis(300);
    let client = cooled_client(&server, cool_down);

    let started = Instant::now();
    assert_ok!(client.get_last_price("btc", "jpy").await);
    let first_done = started.elapsed();
    assert_ok!(client.get_last_price("btc", "jpy").await);
    let second_done = started.elapsed();

    assert!(first_done >= cool_down, "{first_done:?}");
    assert!(second_done - first_done >= cool_down, "{second_done:?}");
}

#[tokio::test]
async fn test_cool_down_skipped_on_failure() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "unsupported pair"})))
        .mount(&server)
        .await;

    let client = cooled_client(&server, Duration::from_secs(10));

    let started = Instant::now();
    let err = client.get_depth("xyz", "jpy").await.unwrap_err();
    assert!(matches!(err, ZaifError::Api { .. }));
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn test_disabled_cool_down_adds_no_delay() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"last_price": 1.0})))
        .mount(&server)
        .await;

    let config = ClientConfig {
        cool_down_time: Duration::from_secs(10),
        ..mock_config(&server)
    };
    let client = assert_ok!(ZaifClient::with_config(config));

    let started = Instant::now();
    assert_ok!(client.get_last_price("btc", "jpy").await);
    assert_ok!(client.get_last_price("btc", "jpy").await);
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn test_swapped_cool_down_strategy() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"last_price": 1.0})))
        .mount(&server)
        .await;

    let client = cooled_client(&server, Duration::from_secs(10))
        .with_cool_down(std::sync::Arc::new(zaif_adapter::NoCoolDown));

    let started = Instant::now();
    assert_ok!(client.get_last_price("btc", "jpy").await);
    assert!(started.elapsed() < Duration::from_secs(10));
}
