//! # DHL Express Rating Client
//!
//! Issues one rating call and reduces the response to the cheapest
//! eligible price.
//!
//! The client knows nothing about caching, packages or profile policy; it
//! receives a fully resolved [`RateRequest`] and returns either a price or
//! a [`CarrierError`]. The [`cheapest_rate`](DhlExpressClient::cheapest_rate)
//! wrapper collapses every error to `None` after logging, which is the
//! contract the orchestrator relies on.
//!
//! # Examples
//!
//! ```no_run
//! use dhl_rates::domain::entities::profile::RateProfile;
//! use dhl_rates::domain::value_objects::address::Address;
//! use dhl_rates::domain::value_objects::parcel::BillableParcel;
//! use dhl_rates::infrastructure::carrier::client::DhlExpressClient;
//! use dhl_rates::infrastructure::carrier::types::RateRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let profile = RateProfile::new("key", "secret", "123456789")
//!     .with_origin(Address::new("US", "10001"));
//! let request = RateRequest::new(
//!     &profile,
//!     Address::new("DE", "10115"),
//!     BillableParcel::new(1.5, 10.0, 5.0, 3.0),
//!     "USD",
//! );
//!
//! let client = DhlExpressClient::new()?;
//! let price = client.cheapest_rate(&request).await;
//! # Ok(())
//! # }
//! ```

use crate::infrastructure::carrier::error::{CarrierError, CarrierResult};
use crate::infrastructure::carrier::http_client::HttpClient;
use crate::infrastructure::carrier::types::{RateRequest, RatesResponse};
use chrono::Utc;
use rust_decimal::Decimal;

/// Production rating endpoint.
pub const PRODUCTION_BASE_URL: &str = "https://express.api.dhl.com/mydhlapi";

/// Sandbox rating endpoint.
pub const SANDBOX_BASE_URL: &str = "https://express.api.dhl.com/mydhlapi/test";

/// Client for the DHL Express (MyDHL) rating API.
#[derive(Debug, Clone)]
pub struct DhlExpressClient {
    /// Wrapped HTTP client.
    http: HttpClient,
    /// Production base URL.
    production_url: String,
    /// Sandbox base URL.
    sandbox_url: String,
}

impl DhlExpressClient {
    /// Creates a client against the real carrier endpoints with default
    /// timeouts.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::InternalError` if the HTTP client cannot be
    /// built.
    pub fn new() -> CarrierResult<Self> {
        Ok(Self {
            http: HttpClient::new()?,
            production_url: PRODUCTION_BASE_URL.to_string(),
            sandbox_url: SANDBOX_BASE_URL.to_string(),
        })
    }

    /// Creates a client with an explicit HTTP client.
    #[must_use]
    pub fn with_http_client(http: HttpClient) -> Self {
        Self {
            http,
            production_url: PRODUCTION_BASE_URL.to_string(),
            sandbox_url: SANDBOX_BASE_URL.to_string(),
        }
    }

    /// Overrides the production base URL.
    ///
    /// Intended for tests and gateway deployments that front the carrier.
    #[must_use]
    pub fn with_production_url(mut self, url: impl Into<String>) -> Self {
        self.production_url = url.into();
        self
    }

    /// Overrides the sandbox base URL.
    #[must_use]
    pub fn with_sandbox_url(mut self, url: impl Into<String>) -> Self {
        self.sandbox_url = url.into();
        self
    }

    /// Returns the cheapest billed price for the request, or `None`.
    ///
    /// Every failure path — transport, authentication, protocol, no
    /// quotable product — is logged at error level and collapsed to
    /// `None`. This method never fails.
    pub async fn cheapest_rate(&self, request: &RateRequest) -> Option<Decimal> {
        match self.rate(request).await {
            Ok(price) => Some(price),
            Err(error) => {
                tracing::error!(error = %error, "carrier rating call failed");
                None
            }
        }
    }

    /// Returns the cheapest billed price for the request.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`] describing the transport, protocol or
    /// no-quote failure.
    pub async fn rate(&self, request: &RateRequest) -> CarrierResult<Decimal> {
        let url = format!("{}/rates", self.base_url(request.sandbox()));
        let params = request.query_params(Utc::now().date_naive());

        let response: RatesResponse = self
            .http
            .get_json(&url, &params, request.api_key(), request.api_secret())
            .await?;

        cheapest_billed_price(&response, request.product_code())
    }

    fn base_url(&self, sandbox: bool) -> &str {
        if sandbox {
            &self.sandbox_url
        } else {
            &self.production_url
        }
    }
}

/// Reduces a rating response to the minimum billed-currency price.
///
/// # Errors
///
/// Returns `CarrierError::NoQuote` when the product list is empty, the
/// product-code filter leaves nothing, or no remaining product carries a
/// billed-currency price entry.
pub fn cheapest_billed_price(
    response: &RatesResponse,
    product_code: Option<&str>,
) -> CarrierResult<Decimal> {
    if response.products.is_empty() {
        return Err(CarrierError::no_quote("empty product list"));
    }

    let candidates: Vec<_> = match product_code {
        Some(code) => response
            .products
            .iter()
            .filter(|product| product.product_code.as_deref() == Some(code))
            .collect(),
        None => response.products.iter().collect(),
    };
    if candidates.is_empty() {
        return Err(CarrierError::no_quote(format!(
            "no product matches code {}",
            product_code.unwrap_or_default()
        )));
    }

    candidates
        .iter()
        .filter_map(|product| product.billed_price())
        .min()
        .ok_or_else(|| CarrierError::no_quote("no billed-currency price on any product"))
}
