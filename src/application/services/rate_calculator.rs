//! # Rate Calculator
//!
//! Orchestrates the quote pipeline: eligibility, aggregation, cache
//! lookup, the carrier call and price post-processing.
//!
//! The public contract is [`compute_price`](RateCalculator::compute_price):
//! it returns `Some(price)` or `None`, never an error. Internally the
//! pipeline runs in `Result` so failures stay classified for logging; the
//! public method is the outermost adapter that collapses them.
//!
//! # Examples
//!
//! ```no_run
//! use dhl_rates::application::services::rate_calculator::RateCalculator;
//! use dhl_rates::domain::entities::package::ShipmentPackage;
//! use dhl_rates::domain::entities::profile::RateProfile;
//! use dhl_rates::domain::value_objects::address::Address;
//! use dhl_rates::infrastructure::cache::InMemoryRateCache;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let calculator = RateCalculator::new(Arc::new(InMemoryRateCache::new()))?;
//!
//! let profile = RateProfile::new("key", "secret", "123456789")
//!     .with_origin(Address::new("US", "10001"));
//! let package = ShipmentPackage::new(1.5, "USD")
//!     .with_destination(Address::new("DE", "10115"));
//!
//! if let Some(price) = calculator.compute_price(&profile, &package).await {
//!     println!("shipping costs {price}");
//! }
//! # Ok(())
//! # }
//! ```

use crate::application::error::{RateError, RateResult};
use crate::application::services::cache_key;
use crate::domain::entities::package::ShipmentPackage;
use crate::domain::entities::profile::RateProfile;
use crate::domain::services::{aggregation, eligibility};
use crate::domain::value_objects::is_blank;
use crate::infrastructure::cache::RateCache;
use crate::infrastructure::carrier::client::DhlExpressClient;
use crate::infrastructure::carrier::types::RateRequest;
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Currency used when neither the profile nor the order names one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Computes shipping quotes for profile/package pairs.
///
/// Stateless across calls apart from the shared cache; concurrent
/// invocations need no coordination.
#[derive(Clone)]
pub struct RateCalculator {
    /// Carrier rating client.
    client: DhlExpressClient,
    /// Quote cache.
    cache: Arc<dyn RateCache>,
    /// Fallback currency.
    default_currency: String,
}

impl RateCalculator {
    /// Creates a calculator with a default carrier client.
    ///
    /// # Errors
    ///
    /// Returns a [`RateError`] if the underlying HTTP client cannot be
    /// built.
    pub fn new(cache: Arc<dyn RateCache>) -> RateResult<Self> {
        Ok(Self::with_client(DhlExpressClient::new()?, cache))
    }

    /// Creates a calculator with an explicit carrier client.
    #[must_use]
    pub fn with_client(client: DhlExpressClient, cache: Arc<dyn RateCache>) -> Self {
        Self {
            client,
            cache,
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Overrides the fallback currency.
    #[must_use]
    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    /// Computes the shipping price for the package, or `None`.
    ///
    /// Ineligible packages return `None` without any I/O. Every failure
    /// past eligibility is logged and collapsed to `None`; this method
    /// never fails and never panics on carrier misbehavior.
    pub async fn compute_price(
        &self,
        profile: &RateProfile,
        package: &ShipmentPackage,
    ) -> Option<Decimal> {
        if !eligibility::is_eligible(profile, package) {
            return None;
        }

        match self.try_compute(profile, package).await {
            Ok(quote) => quote,
            Err(error) => {
                tracing::error!(error = %error, "quote computation failed");
                None
            }
        }
    }

    /// The fallible pipeline behind [`compute_price`](Self::compute_price).
    async fn try_compute(
        &self,
        profile: &RateProfile,
        package: &ShipmentPackage,
    ) -> RateResult<Option<Decimal>> {
        let parcel = aggregation::aggregate(package);
        let destination = package
            .destination()
            .ok_or_else(|| RateError::internal("package lost its destination mid-pipeline"))?
            .clone();
        let currency = self.resolve_currency(profile, package);

        let key = cache_key::build_key(
            profile,
            &destination,
            &parcel,
            &currency,
            Utc::now().date_naive(),
        );

        if let Some(cached) = self.cache.get(&key).await {
            tracing::debug!(key = %key, "quote cache hit");
            return Ok(Some(cached));
        }

        let request = RateRequest::new(profile, destination, parcel, &currency);
        // The client logs its own failures; a miss here is final for this
        // call and is deliberately not cached, so the next call retries.
        let Some(raw) = self.client.cheapest_rate(&request).await else {
            return Ok(None);
        };

        let quoted = apply_pricing(raw, profile);
        self.cache.put(&key, quoted, profile.cache_ttl()).await;
        Ok(Some(quoted))
    }

    /// Resolves the quote currency: profile override, then order
    /// currency, then the calculator default. First non-blank wins.
    fn resolve_currency(&self, profile: &RateProfile, package: &ShipmentPackage) -> String {
        if let Some(currency) = profile.currency()
            && !is_blank(currency)
        {
            return currency.to_string();
        }
        if !is_blank(package.currency()) {
            return package.currency().to_string();
        }
        self.default_currency.clone()
    }
}

/// Applies markup and handling fee, rounding to 2 decimal places.
///
/// Markup multiplies the raw rate before the flat fee is added.
fn apply_pricing(raw: Decimal, profile: &RateProfile) -> Decimal {
    let mut price = raw;
    if let Some(percent) = profile.markup_percent() {
        price *= Decimal::ONE + percent / Decimal::ONE_HUNDRED;
    }
    if let Some(fee) = profile.handling_fee() {
        price += fee;
    }
    price.round_dp(2)
}
