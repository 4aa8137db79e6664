//! End-to-end tests for the quote pipeline: eligibility, caching, the
//! carrier call and price post-processing against a mock server.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use dhl_rates::application::services::rate_calculator::RateCalculator;
use dhl_rates::domain::entities::package::ShipmentPackage;
use dhl_rates::domain::entities::profile::RateProfile;
use dhl_rates::domain::value_objects::address::Address;
use dhl_rates::infrastructure::cache::{InMemoryRateCache, RateCache};
use dhl_rates::infrastructure::carrier::client::DhlExpressClient;
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn profile() -> RateProfile {
    RateProfile::new("testuser", "testpass", "123456789")
        .with_origin(Address::new("US", "10001").with_city("New York"))
}

fn package() -> ShipmentPackage {
    ShipmentPackage::new(1.5, "USD")
        .with_destination(Address::new("DE", "10115").with_city("Berlin"))
}

fn calculator_for(server: &MockServer, cache: Arc<InMemoryRateCache>) -> RateCalculator {
    let client = DhlExpressClient::new()
        .unwrap()
        .with_production_url(server.uri())
        .with_sandbox_url(format!("{}/test", server.uri()));
    RateCalculator::with_client(client, cache)
}

fn rate_body(price: f64) -> serde_json::Value {
    json!({
        "products": [
            {
                "productCode": "P",
                "totalPrice": [
                    { "currencyType": "PULCL", "price": 30.00 },
                    { "currencyType": "BILLC", "price": price }
                ]
            }
        ]
    })
}

#[tokio::test]
async fn returns_carrier_rate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rate_body(42.50)))
        .mount(&server)
        .await;

    let calculator = calculator_for(&server, Arc::new(InMemoryRateCache::new()));
    let price = calculator.compute_price(&profile(), &package()).await;
    assert_eq!(price, Some(Decimal::new(4250, 2)));
}

#[tokio::test]
async fn applies_markup_then_handling_fee() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rate_body(40.00)))
        .mount(&server)
        .await;

    let profile = profile()
        .with_markup_percent(Decimal::new(10, 0))
        .with_handling_fee(Decimal::new(200, 2));

    let calculator = calculator_for(&server, Arc::new(InMemoryRateCache::new()));
    let price = calculator.compute_price(&profile, &package()).await;
    // 40.00 * 1.10 + 2.00
    assert_eq!(price, Some(Decimal::new(4600, 2)));
}

#[tokio::test]
async fn second_call_is_served_from_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rate_body(42.50)))
        .expect(1)
        .mount(&server)
        .await;

    let calculator = calculator_for(&server, Arc::new(InMemoryRateCache::new()));
    let first = calculator.compute_price(&profile(), &package()).await;
    let second = calculator.compute_price(&profile(), &package()).await;
    assert_eq!(first, Some(Decimal::new(4250, 2)));
    assert_eq!(second, first);

    server.verify().await;
}

#[tokio::test]
async fn cached_value_includes_post_processing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rate_body(40.00)))
        .expect(1)
        .mount(&server)
        .await;

    let cache = Arc::new(InMemoryRateCache::new());
    let profile = profile().with_markup_percent(Decimal::new(10, 0));
    let calculator = calculator_for(&server, Arc::clone(&cache));

    let first = calculator.compute_price(&profile, &package()).await;
    let second = calculator.compute_price(&profile, &package()).await;
    assert_eq!(first, Some(Decimal::new(4400, 2)));
    assert_eq!(second, Some(Decimal::new(4400, 2)));
}

#[tokio::test]
async fn failures_are_not_cached_and_retry_next_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(2)
        .mount(&server)
        .await;

    let cache = Arc::new(InMemoryRateCache::new());
    let calculator = calculator_for(&server, Arc::clone(&cache));

    assert_eq!(calculator.compute_price(&profile(), &package()).await, None);
    assert_eq!(calculator.compute_price(&profile(), &package()).await, None);
    assert!(cache.is_empty());

    server.verify().await;
}

#[tokio::test]
async fn no_quotable_product_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "products": [] })))
        .expect(2)
        .mount(&server)
        .await;

    let cache = Arc::new(InMemoryRateCache::new());
    let calculator = calculator_for(&server, Arc::clone(&cache));

    assert_eq!(calculator.compute_price(&profile(), &package()).await, None);
    assert_eq!(calculator.compute_price(&profile(), &package()).await, None);
    assert!(cache.is_empty());
}

#[tokio::test]
async fn ineligible_package_spends_no_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rate_body(42.50)))
        .expect(0)
        .mount(&server)
        .await;

    let calculator = calculator_for(&server, Arc::new(InMemoryRateCache::new()));

    // Blank credential.
    let blank = RateProfile::new("", "testpass", "123456789")
        .with_origin(Address::new("US", "10001"));
    assert_eq!(calculator.compute_price(&blank, &package()).await, None);

    // Contradictory weight bounds reject regardless of the package.
    let misconfigured = profile().with_minimum_weight(5.0).with_maximum_weight(1.0);
    assert_eq!(
        calculator.compute_price(&misconfigured, &package()).await,
        None
    );

    // Missing destination.
    let no_destination = ShipmentPackage::new(1.5, "USD");
    assert_eq!(
        calculator.compute_price(&profile(), &no_destination).await,
        None
    );

    server.verify().await;
}

#[tokio::test]
async fn profile_currency_override_reaches_the_carrier() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .and(query_param("requestedCurrencyCode", "GBP"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rate_body(42.50)))
        .expect(1)
        .mount(&server)
        .await;

    let calculator = calculator_for(&server, Arc::new(InMemoryRateCache::new()));
    let price = calculator
        .compute_price(&profile().with_currency("GBP"), &package())
        .await;
    assert_eq!(price, Some(Decimal::new(4250, 2)));
}

#[tokio::test]
async fn order_currency_used_without_override() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .and(query_param("requestedCurrencyCode", "EUR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rate_body(42.50)))
        .expect(1)
        .mount(&server)
        .await;

    let package = ShipmentPackage::new(1.5, "EUR")
        .with_destination(Address::new("DE", "10115").with_city("Berlin"));

    let calculator = calculator_for(&server, Arc::new(InMemoryRateCache::new()));
    let price = calculator.compute_price(&profile(), &package).await;
    assert_eq!(price, Some(Decimal::new(4250, 2)));
}

#[tokio::test]
async fn sandbox_profile_hits_sandbox_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rate_body(42.50)))
        .expect(1)
        .mount(&server)
        .await;

    let calculator = calculator_for(&server, Arc::new(InMemoryRateCache::new()));
    let price = calculator
        .compute_price(&profile().with_sandbox(true), &package())
        .await;
    assert_eq!(price, Some(Decimal::new(4250, 2)));
}

#[tokio::test]
async fn currency_change_misses_the_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rate_body(42.50)))
        .expect(2)
        .mount(&server)
        .await;

    let calculator = calculator_for(&server, Arc::new(InMemoryRateCache::new()));
    calculator.compute_price(&profile(), &package()).await;
    calculator
        .compute_price(&profile().with_currency("EUR"), &package())
        .await;

    server.verify().await;
}

#[tokio::test]
async fn expired_cache_entry_triggers_a_fresh_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rate_body(42.50)))
        .expect(2)
        .mount(&server)
        .await;

    let profile = profile().with_cache_ttl(Duration::from_millis(20));
    let calculator = calculator_for(&server, Arc::new(InMemoryRateCache::new()));

    calculator.compute_price(&profile, &package()).await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    calculator.compute_price(&profile, &package()).await;

    server.verify().await;
}

#[tokio::test]
async fn pre_seeded_cache_short_circuits_the_client() {
    use chrono::Utc;
    use dhl_rates::application::services::cache_key::build_key;
    use dhl_rates::domain::services::aggregation::aggregate;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rate_body(42.50)))
        .expect(0)
        .mount(&server)
        .await;

    let cache = Arc::new(InMemoryRateCache::new());
    let parcel = aggregate(&package());
    let key = build_key(
        &profile(),
        package().destination().unwrap(),
        &parcel,
        "USD",
        Utc::now().date_naive(),
    );
    cache
        .put(&key, Decimal::new(2999, 2), Duration::from_secs(600))
        .await;

    let calculator = calculator_for(&server, Arc::clone(&cache));
    let price = calculator.compute_price(&profile(), &package()).await;
    assert_eq!(price, Some(Decimal::new(2999, 2)));

    server.verify().await;
}
