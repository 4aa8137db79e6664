//! # Cache Key Derivation
//!
//! Derives the cache key for one quote computation.
//!
//! The key is a pure function of every value that affects the resulting
//! price: profile identity and policy knobs, origin, destination, the
//! aggregated parcel, the resolved currency and the calendar date. Two
//! calls differing in any one of these must not collide; two identical
//! calls must produce the identical key. The date component makes quotes
//! expire across a day boundary independent of the TTL.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use dhl_rates::application::services::cache_key::build_key;
//! use dhl_rates::domain::entities::profile::RateProfile;
//! use dhl_rates::domain::value_objects::address::Address;
//! use dhl_rates::domain::value_objects::parcel::BillableParcel;
//!
//! let profile = RateProfile::new("key", "secret", "123456789")
//!     .with_origin(Address::new("US", "10001"));
//! let destination = Address::new("DE", "10115").with_city("Berlin");
//! let parcel = BillableParcel::new(1.5, 10.0, 5.0, 3.0);
//! let today = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
//!
//! let key = build_key(&profile, &destination, &parcel, "USD", today);
//! assert!(key.starts_with("dhl-rates/v1/"));
//! assert!(key.ends_with("/2026-08-10"));
//! ```

use crate::domain::entities::profile::RateProfile;
use crate::domain::value_objects::address::Address;
use crate::domain::value_objects::parcel::BillableParcel;
use chrono::NaiveDate;

/// Namespace and version tag prefixed to every key.
///
/// Bumping the version segment invalidates all previously cached quotes.
pub const KEY_NAMESPACE: &str = "dhl-rates/v1";

/// Marker for absent optional fields.
///
/// Distinct from the empty string so `None` and `Some("")` cannot
/// produce the same key.
const ABSENT: &str = "-";

/// Builds the cache key for one quote computation.
///
/// Fields are joined with `/` in a fixed order; weight is rendered at 3
/// decimal places and each dimension at 2, matching the precision sent to
/// the carrier.
#[must_use]
pub fn build_key(
    profile: &RateProfile,
    destination: &Address,
    parcel: &BillableParcel,
    currency: &str,
    today: NaiveDate,
) -> String {
    let customs = profile
        .customs_declarable()
        .map_or_else(|| ABSENT.to_string(), |flag| flag.to_string());

    [
        KEY_NAMESPACE.to_string(),
        profile.account_number().to_string(),
        profile.unit_of_measurement().to_string(),
        profile.product_code().unwrap_or(ABSENT).to_string(),
        customs,
        profile.stock_location_id().unwrap_or(ABSENT).to_string(),
        profile.origin().country_code().to_string(),
        profile.origin().postal_code().to_string(),
        profile.origin().city().unwrap_or(ABSENT).to_string(),
        destination.country_code().to_string(),
        destination.postal_code().to_string(),
        destination.city().unwrap_or(ABSENT).to_string(),
        format!("{:.3}", parcel.weight()),
        format!("{:.2}", parcel.length()),
        format!("{:.2}", parcel.width()),
        format!("{:.2}", parcel.height()),
        currency.to_string(),
        today.to_string(),
    ]
    .join("/")
}
