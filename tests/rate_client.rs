//! Integration tests for the carrier rating client against a mock server.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use dhl_rates::domain::entities::profile::RateProfile;
use dhl_rates::domain::value_objects::address::Address;
use dhl_rates::domain::value_objects::parcel::BillableParcel;
use dhl_rates::infrastructure::carrier::client::DhlExpressClient;
use dhl_rates::infrastructure::carrier::error::CarrierError;
use dhl_rates::infrastructure::carrier::http_client::HttpClient;
use dhl_rates::infrastructure::carrier::types::RateRequest;
use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{basic_auth, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn profile() -> RateProfile {
    RateProfile::new("testuser", "testpass", "123456789")
        .with_origin(Address::new("US", "10001").with_city("New York"))
        .with_sandbox(true)
}

fn request_for(profile: &RateProfile) -> RateRequest {
    RateRequest::new(
        profile,
        Address::new("DE", "10115").with_city("Berlin"),
        BillableParcel::new(1.5, 10.0, 5.0, 3.0),
        "USD",
    )
}

fn client_for(server: &MockServer) -> DhlExpressClient {
    DhlExpressClient::new()
        .unwrap()
        .with_production_url(server.uri())
        .with_sandbox_url(format!("{}/test", server.uri()))
}

fn two_product_body() -> serde_json::Value {
    json!({
        "products": [
            {
                "productCode": "P",
                "productName": "EXPRESS WORLDWIDE",
                "totalPrice": [
                    { "currencyType": "PULCL", "price": 30.00 },
                    { "currencyType": "BILLC", "price": 45.00 }
                ]
            },
            {
                "productCode": "D",
                "productName": "EXPRESS WORLDWIDE",
                "totalPrice": [
                    { "currencyType": "PULCL", "price": 20.00 },
                    { "currencyType": "BILLC", "price": 38.50 }
                ]
            }
        ]
    })
}

#[tokio::test]
async fn returns_minimum_billed_price() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_product_body()))
        .mount(&server)
        .await;

    let rate = client_for(&server).cheapest_rate(&request_for(&profile())).await;
    assert_eq!(rate, Some(Decimal::new(3850, 2)));
}

#[tokio::test]
async fn single_product_returns_its_price() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [
                {
                    "productCode": "P",
                    "totalPrice": [ { "currencyType": "BILLC", "price": 55.00 } ]
                }
            ]
        })))
        .mount(&server)
        .await;

    let rate = client_for(&server).cheapest_rate(&request_for(&profile())).await;
    assert_eq!(rate, Some(Decimal::new(5500, 2)));
}

#[tokio::test]
async fn product_code_filter_selects_matching_product() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_product_body()))
        .mount(&server)
        .await;

    let profile = profile().with_product_code("P");
    let rate = client_for(&server).cheapest_rate(&request_for(&profile)).await;
    assert_eq!(rate, Some(Decimal::new(4500, 2)));
}

#[tokio::test]
async fn filter_without_match_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_product_body()))
        .mount(&server)
        .await;

    let profile = profile().with_product_code("X");
    let rate = client_for(&server).cheapest_rate(&request_for(&profile)).await;
    assert_eq!(rate, None);
}

#[tokio::test]
async fn empty_product_list_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "products": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.cheapest_rate(&request_for(&profile())).await, None);
    assert!(matches!(
        client.rate(&request_for(&profile())).await,
        Err(CarrierError::NoQuote { .. })
    ));
}

#[tokio::test]
async fn missing_billed_currency_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [
                {
                    "productCode": "P",
                    "totalPrice": [ { "currencyType": "PULCL", "price": 30.00 } ]
                }
            ]
        })))
        .mount(&server)
        .await;

    let rate = client_for(&server).cheapest_rate(&request_for(&profile())).await;
    assert_eq!(rate, None);
}

#[tokio::test]
async fn unauthorized_is_a_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/rates"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Unauthorized" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.cheapest_rate(&request_for(&profile())).await, None);

    let error = client.rate(&request_for(&profile())).await.unwrap_err();
    assert!(error.is_client_error());
}

#[tokio::test]
async fn server_error_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/rates"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "detail": "Internal Server Error" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.cheapest_rate(&request_for(&profile())).await, None);

    let error = client.rate(&request_for(&profile())).await.unwrap_err();
    assert!(error.is_retryable());
}

#[tokio::test]
async fn malformed_body_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.cheapest_rate(&request_for(&profile())).await, None);
    assert!(matches!(
        client.rate(&request_for(&profile())).await,
        Err(CarrierError::ProtocolError { .. })
    ));
}

#[tokio::test]
async fn connection_refused_returns_none() {
    // Nothing listens on this port.
    let client = DhlExpressClient::new()
        .unwrap()
        .with_sandbox_url("http://127.0.0.1:9/test");

    let client_error = client.rate(&request_for(&profile())).await.unwrap_err();
    assert!(client_error.is_retryable());
    assert_eq!(client.cheapest_rate(&request_for(&profile())).await, None);
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/rates"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(two_product_body())
                .set_delay(std::time::Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let http = HttpClient::with_timeouts(1_000, 100).unwrap();
    let client = DhlExpressClient::with_http_client(http)
        .with_sandbox_url(format!("{}/test", server.uri()));

    assert_eq!(client.cheapest_rate(&request_for(&profile())).await, None);
}

#[tokio::test]
async fn production_flag_selects_production_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_product_body()))
        .expect(1)
        .mount(&server)
        .await;

    let profile = RateProfile::new("testuser", "testpass", "123456789")
        .with_origin(Address::new("US", "10001").with_city("New York"));
    let rate = client_for(&server).cheapest_rate(&request_for(&profile)).await;
    assert_eq!(rate, Some(Decimal::new(3850, 2)));
}

#[tokio::test]
async fn request_carries_auth_and_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/rates"))
        .and(basic_auth("testuser", "testpass"))
        .and(query_param("accountNumber", "123456789"))
        .and(query_param("originCountryCode", "US"))
        .and(query_param("originCityName", "New York"))
        .and(query_param("destinationCountryCode", "DE"))
        .and(query_param("destinationPostalCode", "10115"))
        .and(query_param("weight", "1.5"))
        .and(query_param("length", "10"))
        .and(query_param("unitOfMeasurement", "metric"))
        .and(query_param("isCustomsDeclarable", "true"))
        .and(query_param("requestedCurrencyCode", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_product_body()))
        .expect(1)
        .mount(&server)
        .await;

    let rate = client_for(&server).cheapest_rate(&request_for(&profile())).await;
    assert_eq!(rate, Some(Decimal::new(3850, 2)));
}

#[tokio::test]
async fn domestic_shipment_is_not_customs_declarable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/rates"))
        .and(query_param("isCustomsDeclarable", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_product_body()))
        .expect(1)
        .mount(&server)
        .await;

    let request = RateRequest::new(
        &profile(),
        Address::new("US", "90210").with_city("Beverly Hills"),
        BillableParcel::new(1.5, 10.0, 5.0, 3.0),
        "USD",
    );
    let rate = client_for(&server).cheapest_rate(&request).await;
    assert_eq!(rate, Some(Decimal::new(3850, 2)));
}
