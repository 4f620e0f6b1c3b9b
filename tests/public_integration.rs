use std::sync::Arc;

use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bitflyer_api_client::auth::{StaticCredentials, TimestampProvider, sign_message};
use bitflyer_api_client::rest::BitflyerRestClient;
use rust_decimal::Decimal;

const FIXED_TIMESTAMP: u64 = 1_234_567_890;

fn build_client(server: &MockServer) -> BitflyerRestClient {
    let credentials = Arc::new(StaticCredentials::new("test_key", "secret"));
    let clock: Arc<dyn TimestampProvider> = Arc::new(|| FIXED_TIMESTAMP);
    BitflyerRestClient::builder(credentials)
        .base_url(server.uri())
        .timestamp_provider(clock)
        .build()
}

fn ticker_json(product_code: &str) -> serde_json::Value {
    serde_json::json!({
        "product_code": product_code,
        "state": "RUNNING",
        "timestamp": "2015-07-08T02:50:59.97",
        "tick_id": 3579,
        "best_bid": 30000,
        "best_ask": 36640,
        "best_bid_size": 0.1,
        "best_ask_size": 5,
        "total_bid_depth": 15.13,
        "total_ask_depth": 20,
        "market_bid_size": 0,
        "market_ask_size": 0,
        "ltp": 31690,
        "volume": 16819.26,
        "volume_by_product": 6819.26
    })
}

#[tokio::test]
async fn test_get_order_book_preserves_level_order() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "mid_price": 33320,
        "bids": [
            {"price": 30000, "size": 0.1},
            {"price": 31000, "size": 2},
            {"price": 25570, "size": 3}
        ],
        "asks": [
            {"price": 36640, "size": 5},
            {"price": 36600, "size": 3},
            {"price": 36700, "size": 1.2}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v1/getboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let book = client.get_order_book().await.unwrap();

    let bid_prices: Vec<Decimal> = book.bids.iter().map(|l| l.price).collect();
    let ask_prices: Vec<Decimal> = book.asks.iter().map(|l| l.price).collect();
    assert_eq!(
        bid_prices,
        vec![Decimal::from(30000), Decimal::from(31000), Decimal::from(25570)]
    );
    assert_eq!(
        ask_prices,
        vec![Decimal::from(36640), Decimal::from(36600), Decimal::from(36700)]
    );
    assert_eq!(book.mid_price, Decimal::from(33320));
}

#[tokio::test]
async fn test_get_order_book_sends_signed_headers() {
    let server = MockServer::start().await;
    let response = serde_json::json!({"mid_price": 1, "bids": [], "asks": []});

    Mock::given(method("GET"))
        .and(path("/v1/getboard"))
        .and(header("ACCESS-KEY", "test_key"))
        .and(header("ACCESS-TIMESTAMP", "1234567890"))
        .and(header(
            "ACCESS-SIGN",
            "3b48267e8947be5647ba1f035ec40bdb2144b6e48e510e44d56a6b2bb50eeea9",
        ))
        .and(header("Content-Type", "application/json"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let book = client.get_order_book().await.unwrap();
    assert!(book.bids.is_empty());
    assert!(book.best_ask().is_none());
}

#[tokio::test]
async fn test_get_order_book_for_product_signs_query() {
    let server = MockServer::start().await;
    let response = serde_json::json!({"mid_price": 250000, "bids": [], "asks": []});
    let expected_sign = sign_message(
        "secret",
        "1234567890",
        "GET",
        "/v1/getboard?product_code=ETH_JPY",
        b"",
    );

    Mock::given(method("GET"))
        .and(path("/v1/getboard"))
        .and(query_param("product_code", "ETH_JPY"))
        .and(header("ACCESS-SIGN", expected_sign.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let book = client.get_order_book_for("ETH_JPY").await.unwrap();
    assert_eq!(book.mid_price, Decimal::from(250000));
}

#[tokio::test]
async fn test_get_ticker() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/getticker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticker_json("BTC_JPY")))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let ticker = client.get_ticker().await.unwrap();
    assert_eq!(ticker.product_code, "BTC_JPY");
    assert_eq!(ticker.tick_id, 3579);
    assert_eq!(ticker.ltp, Decimal::from(31690));
    assert_eq!(ticker.best_bid_size, "0.1".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn test_get_ticker_for_product() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/getticker"))
        .and(query_param("product_code", "FX_BTC_JPY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticker_json("FX_BTC_JPY")))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let ticker = client.get_ticker_for("FX_BTC_JPY").await.unwrap();
    assert_eq!(ticker.product_code, "FX_BTC_JPY");
}

#[tokio::test]
async fn test_get_ticker_shape_mismatch_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/getticker"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"product_code": "BTC_JPY"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_ticker().await.unwrap_err();
    assert!(err.is_decode(), "unexpected error: {err:?}");
}
