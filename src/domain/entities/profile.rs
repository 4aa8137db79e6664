//! # Rate Profile
//!
//! Carrier configuration for a single rating profile.
//!
//! A profile bundles the credentials, origin address and policy knobs an
//! operator configures for one shipping method. It is read-only at quote
//! time; editing happens in the host application's admin layer.
//!
//! # Examples
//!
//! ```
//! use dhl_rates::domain::entities::profile::RateProfile;
//! use dhl_rates::domain::value_objects::address::Address;
//! use dhl_rates::domain::value_objects::enums::ShippingDatePolicy;
//! use rust_decimal::Decimal;
//!
//! let profile = RateProfile::new("key", "secret", "123456789")
//!     .with_origin(Address::new("US", "10001").with_city("New York"))
//!     .with_currency("GBP")
//!     .with_markup_percent(Decimal::new(10, 0))
//!     .with_shipping_date_policy(ShippingDatePolicy::SkipWeekends)
//!     .with_sandbox(true);
//!
//! assert_eq!(profile.currency(), Some("GBP"));
//! assert!(profile.sandbox());
//! ```

use crate::domain::value_objects::address::Address;
use crate::domain::value_objects::enums::{ShippingDatePolicy, UnitOfMeasurement};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time-to-live for cached quotes.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

/// Immutable configuration for one carrier rating profile.
///
/// Optional fields model genuinely optional operator preferences; required
/// ones are validated once, at the eligibility boundary, not in accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateProfile {
    /// API key (primary credential).
    api_key: String,
    /// API secret.
    api_secret: String,
    /// Carrier account number.
    account_number: String,
    /// Origin address.
    origin: Address,
    /// Unit system for weight and dimensions.
    unit_of_measurement: UnitOfMeasurement,
    /// Currency override; falls back to the order currency when unset.
    currency: Option<String>,
    /// Whether to use the carrier's sandbox endpoint.
    sandbox: bool,
    /// Restrict quoting to a single carrier product code.
    product_code: Option<String>,
    /// Customs-declarable override; derived from the route when unset.
    customs_declarable: Option<bool>,
    /// Minimum quotable package weight.
    minimum_weight: Option<f64>,
    /// Maximum quotable package weight.
    maximum_weight: Option<f64>,
    /// Percentage markup applied to the raw carrier rate.
    markup_percent: Option<Decimal>,
    /// Flat handling fee added after markup.
    handling_fee: Option<Decimal>,
    /// Pin quoting to packages shipped from this stock location.
    stock_location_id: Option<String>,
    /// How the planned shipping date is derived.
    shipping_date_policy: ShippingDatePolicy,
    /// Time-to-live for cached quotes.
    cache_ttl: Duration,
}

impl RateProfile {
    /// Creates a profile with credentials and defaults for everything else.
    ///
    /// The origin address starts blank; set it with [`with_origin`]
    /// before quoting, otherwise eligibility will reject every package.
    ///
    /// [`with_origin`]: Self::with_origin
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            account_number: account_number.into(),
            origin: Address::new("", ""),
            unit_of_measurement: UnitOfMeasurement::default(),
            currency: None,
            sandbox: false,
            product_code: None,
            customs_declarable: None,
            minimum_weight: None,
            maximum_weight: None,
            markup_percent: None,
            handling_fee: None,
            stock_location_id: None,
            shipping_date_policy: ShippingDatePolicy::default(),
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Sets the origin address.
    #[must_use]
    pub fn with_origin(mut self, origin: Address) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the unit system.
    #[must_use]
    pub fn with_unit_of_measurement(mut self, unit: UnitOfMeasurement) -> Self {
        self.unit_of_measurement = unit;
        self
    }

    /// Sets the currency override.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Toggles the sandbox endpoint.
    #[must_use]
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Restricts quoting to one carrier product code.
    #[must_use]
    pub fn with_product_code(mut self, product_code: impl Into<String>) -> Self {
        self.product_code = Some(product_code.into());
        self
    }

    /// Overrides the customs-declarable derivation.
    #[must_use]
    pub fn with_customs_declarable(mut self, declarable: bool) -> Self {
        self.customs_declarable = Some(declarable);
        self
    }

    /// Sets the minimum quotable weight.
    #[must_use]
    pub fn with_minimum_weight(mut self, weight: f64) -> Self {
        self.minimum_weight = Some(weight);
        self
    }

    /// Sets the maximum quotable weight.
    #[must_use]
    pub fn with_maximum_weight(mut self, weight: f64) -> Self {
        self.maximum_weight = Some(weight);
        self
    }

    /// Sets the percentage markup applied to the raw rate.
    #[must_use]
    pub fn with_markup_percent(mut self, percent: Decimal) -> Self {
        self.markup_percent = Some(percent);
        self
    }

    /// Sets the flat handling fee added after markup.
    #[must_use]
    pub fn with_handling_fee(mut self, fee: Decimal) -> Self {
        self.handling_fee = Some(fee);
        self
    }

    /// Pins quoting to packages shipped from the given stock location.
    #[must_use]
    pub fn with_stock_location_id(mut self, id: impl Into<String>) -> Self {
        self.stock_location_id = Some(id.into());
        self
    }

    /// Sets the planned-shipping-date policy.
    #[must_use]
    pub fn with_shipping_date_policy(mut self, policy: ShippingDatePolicy) -> Self {
        self.shipping_date_policy = policy;
        self
    }

    /// Sets the cache time-to-live.
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
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

    /// Returns the account number.
    #[must_use]
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Returns the origin address.
    #[must_use]
    pub fn origin(&self) -> &Address {
        &self.origin
    }

    /// Returns the unit system.
    #[must_use]
    pub fn unit_of_measurement(&self) -> UnitOfMeasurement {
        self.unit_of_measurement
    }

    /// Returns the currency override, if set.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Returns true if the sandbox endpoint should be used.
    #[must_use]
    pub fn sandbox(&self) -> bool {
        self.sandbox
    }

    /// Returns the product code filter, if set.
    #[must_use]
    pub fn product_code(&self) -> Option<&str> {
        self.product_code.as_deref()
    }

    /// Returns the customs-declarable override, if set.
    #[must_use]
    pub fn customs_declarable(&self) -> Option<bool> {
        self.customs_declarable
    }

    /// Returns the minimum quotable weight, if set.
    #[must_use]
    pub fn minimum_weight(&self) -> Option<f64> {
        self.minimum_weight
    }

    /// Returns the maximum quotable weight, if set.
    #[must_use]
    pub fn maximum_weight(&self) -> Option<f64> {
        self.maximum_weight
    }

    /// Returns the percentage markup, if set.
    #[must_use]
    pub fn markup_percent(&self) -> Option<Decimal> {
        self.markup_percent
    }

    /// Returns the flat handling fee, if set.
    #[must_use]
    pub fn handling_fee(&self) -> Option<Decimal> {
        self.handling_fee
    }

    /// Returns the pinned stock location id, if set.
    #[must_use]
    pub fn stock_location_id(&self) -> Option<&str> {
        self.stock_location_id.as_deref()
    }

    /// Returns the planned-shipping-date policy.
    #[must_use]
    pub fn shipping_date_policy(&self) -> ShippingDatePolicy {
        self.shipping_date_policy
    }

    /// Returns the cache time-to-live.
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }
}
