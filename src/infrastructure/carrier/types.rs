//! # Carrier Wire Types
//!
//! The outbound rating request and the carrier's response shape.
//!
//! [`RateRequest`] is a self-contained snapshot of everything one rating
//! call needs; it is built from the profile, the resolved destination and
//! the aggregated parcel, so the client itself stays free of profile and
//! package knowledge. The response types mirror the carrier's JSON.

use crate::domain::entities::profile::RateProfile;
use crate::domain::value_objects::address::Address;
use crate::domain::value_objects::enums::{ShippingDatePolicy, UnitOfMeasurement};
use crate::domain::value_objects::is_blank;
use crate::domain::value_objects::parcel::BillableParcel;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price entry tag for the customer-facing billable amount.
///
/// Carrier responses carry several price entries per product (billed
/// currency, pickup-country currency, base currency); only this one is
/// quoted to the customer.
pub const BILLED_CURRENCY_TYPE: &str = "BILLC";

/// Parameters of one outbound rating request.
#[derive(Debug, Clone, PartialEq)]
pub struct RateRequest {
    /// API key.
    api_key: String,
    /// API secret.
    api_secret: String,
    /// Carrier account number.
    account_number: String,
    /// Origin address.
    origin: Address,
    /// Destination address.
    destination: Address,
    /// Aggregated billable parcel.
    parcel: BillableParcel,
    /// Unit system for the parcel measurements.
    unit_of_measurement: UnitOfMeasurement,
    /// Currency the quote is requested in.
    currency: String,
    /// Whether to hit the sandbox endpoint.
    sandbox: bool,
    /// Restrict quoting to this product code.
    product_code: Option<String>,
    /// Customs-declarable override.
    customs_declarable: Option<bool>,
    /// Planned-shipping-date policy.
    shipping_date_policy: ShippingDatePolicy,
}

impl RateRequest {
    /// Builds a request from the profile and the resolved per-quote values.
    #[must_use]
    pub fn new(
        profile: &RateProfile,
        destination: Address,
        parcel: BillableParcel,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            api_key: profile.api_key().to_string(),
            api_secret: profile.api_secret().to_string(),
            account_number: profile.account_number().to_string(),
            origin: profile.origin().clone(),
            destination,
            parcel,
            unit_of_measurement: profile.unit_of_measurement(),
            currency: currency.into(),
            sandbox: profile.sandbox(),
            product_code: profile.product_code().map(str::to_string),
            customs_declarable: profile.customs_declarable(),
            shipping_date_policy: profile.shipping_date_policy(),
        }
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the API secret.
    #[must_use]
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Returns true if the sandbox endpoint should be used.
    #[must_use]
    pub fn sandbox(&self) -> bool {
        self.sandbox
    }

    /// Returns the product code filter, if any.
    #[must_use]
    pub fn product_code(&self) -> Option<&str> {
        self.product_code.as_deref()
    }

    /// Returns whether the shipment must be declared to customs.
    ///
    /// An explicit profile override wins; otherwise the shipment is
    /// declarable exactly when it crosses a country border.
    #[must_use]
    pub fn is_customs_declarable(&self) -> bool {
        self.customs_declarable.unwrap_or_else(|| {
            !self
                .origin
                .country_code()
                .eq_ignore_ascii_case(self.destination.country_code())
        })
    }

    /// Builds the query parameters for the given current date.
    ///
    /// Parameters with blank values are omitted; the carrier rejects empty
    /// strings for optional fields like city names.
    #[must_use]
    pub fn query_params(&self, today: NaiveDate) -> Vec<(&'static str, String)> {
        let planned_date = self.shipping_date_policy.planned_date(today);

        let params = vec![
            ("accountNumber", self.account_number.clone()),
            ("originCountryCode", self.origin.country_code().to_string()),
            ("originPostalCode", self.origin.postal_code().to_string()),
            ("originCityName", self.origin.city_or_default().to_string()),
            (
                "destinationCountryCode",
                self.destination.country_code().to_string(),
            ),
            (
                "destinationPostalCode",
                self.destination.postal_code().to_string(),
            ),
            (
                "destinationCityName",
                self.destination.city_or_default().to_string(),
            ),
            ("weight", format_rounded(self.parcel.weight(), 3)),
            ("length", format_rounded(self.parcel.length(), 2)),
            ("width", format_rounded(self.parcel.width(), 2)),
            ("height", format_rounded(self.parcel.height(), 2)),
            ("plannedShippingDate", planned_date.to_string()),
            ("unitOfMeasurement", self.unit_of_measurement.to_string()),
            ("isCustomsDeclarable", self.is_customs_declarable().to_string()),
            (
                "nextBusinessDay",
                self.shipping_date_policy.next_business_day().to_string(),
            ),
            ("requestedCurrencyCode", self.currency.clone()),
        ];

        params
            .into_iter()
            .filter(|(_, value)| !is_blank(value))
            .collect()
    }
}

/// Rounds to `decimals` places and trims trailing zeros.
fn format_rounded(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// A single price entry on a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPrice {
    /// Price entry tag (`BILLC`, `PULCL`, ...).
    #[serde(rename = "currencyType")]
    pub currency_type: Option<String>,
    /// The price amount.
    pub price: Option<Decimal>,
}

/// One quotable product in a rating response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateProduct {
    /// Carrier product code.
    #[serde(rename = "productCode")]
    pub product_code: Option<String>,
    /// Price entries for this product.
    #[serde(rename = "totalPrice", default)]
    pub total_price: Vec<ProductPrice>,
}

impl RateProduct {
    /// Returns this product's billed-currency price, if it has one.
    #[must_use]
    pub fn billed_price(&self) -> Option<Decimal> {
        self.total_price
            .iter()
            .find(|entry| entry.currency_type.as_deref() == Some(BILLED_CURRENCY_TYPE))
            .and_then(|entry| entry.price)
    }
}

/// The carrier's rating response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesResponse {
    /// Quotable products for the requested shipment.
    #[serde(default)]
    pub products: Vec<RateProduct>,
}
