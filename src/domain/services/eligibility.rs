//! # Eligibility Checking
//!
//! Decides whether a profile may quote a package at all, before any
//! network traffic is spent.
//!
//! The check is a pure predicate over the profile and the package. Every
//! rejection carries a structured [`Ineligibility`] reason so tests and
//! logs can tell a misconfigured profile from a merely unquotable package;
//! callers of [`is_eligible`] only see the boolean.
//!
//! # Examples
//!
//! ```
//! use dhl_rates::domain::entities::package::ShipmentPackage;
//! use dhl_rates::domain::entities::profile::RateProfile;
//! use dhl_rates::domain::services::eligibility::{check, Ineligibility};
//! use dhl_rates::domain::value_objects::address::Address;
//!
//! let profile = RateProfile::new("key", "secret", "123456789")
//!     .with_origin(Address::new("US", "10001"));
//! let package = ShipmentPackage::new(1.5, "USD")
//!     .with_destination(Address::new("DE", "10115"));
//!
//! assert!(check(&profile, &package).is_ok());
//!
//! let no_destination = ShipmentPackage::new(1.5, "USD");
//! assert_eq!(
//!     check(&profile, &no_destination),
//!     Err(Ineligibility::MissingDestination)
//! );
//! ```

use crate::domain::entities::package::ShipmentPackage;
use crate::domain::entities::profile::RateProfile;
use crate::domain::value_objects::parcel::WEIGHT_FLOOR;
use crate::domain::value_objects::{is_blank, is_blank_opt};
use thiserror::Error;

/// Reason a profile/package pair cannot be quoted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Ineligibility {
    /// A required profile field is blank.
    #[error("required profile field is blank: {field}")]
    MissingRequiredField {
        /// Name of the blank field.
        field: &'static str,
    },

    /// The profile's weight bounds contradict each other.
    ///
    /// This is a configuration error, not a property of the package.
    #[error("minimum weight {minimum} exceeds maximum weight {maximum}")]
    InvalidWeightBounds {
        /// Configured minimum weight.
        minimum: f64,
        /// Configured maximum weight.
        maximum: f64,
    },

    /// The package does not ship from the pinned stock location.
    #[error("package stock location {actual:?} does not match pinned location {pinned:?}")]
    StockLocationMismatch {
        /// Location id pinned on the profile.
        pinned: String,
        /// Location id on the package, if any.
        actual: Option<String>,
    },

    /// The package has no destination address yet.
    #[error("package has no destination address")]
    MissingDestination,

    /// The destination address carries no country code.
    #[error("destination country code is blank")]
    BlankDestinationCountry,

    /// The package weight falls outside the configured bounds.
    #[error("package weight {weight} outside configured bounds")]
    WeightOutOfBounds {
        /// Resolved package weight.
        weight: f64,
        /// Configured minimum, if any.
        minimum: Option<f64>,
        /// Configured maximum, if any.
        maximum: Option<f64>,
    },
}

impl Ineligibility {
    /// Returns true if the profile itself is misconfigured.
    ///
    /// Misconfiguration rejects every package until an operator fixes the
    /// profile, so it is logged louder than per-package rejections.
    #[must_use]
    pub fn is_misconfiguration(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredField { .. } | Self::InvalidWeightBounds { .. }
        )
    }
}

/// Checks whether the profile may quote the package.
///
/// Pure, no I/O. Checks short-circuit in a fixed order; the first failure
/// wins.
///
/// # Errors
///
/// Returns the first [`Ineligibility`] encountered.
pub fn check(profile: &RateProfile, package: &ShipmentPackage) -> Result<(), Ineligibility> {
    check_required_fields(profile)?;
    check_weight_bounds_config(profile)?;
    check_stock_location(profile, package)?;

    let destination = package
        .destination()
        .ok_or(Ineligibility::MissingDestination)?;
    if !destination.has_country() {
        return Err(Ineligibility::BlankDestinationCountry);
    }

    check_weight(profile, package)
}

/// Checks eligibility, logging the rejection reason.
///
/// Misconfigured profiles log at `warn`, per-package rejections at
/// `debug`. Nothing is surfaced to the caller beyond the boolean.
#[must_use]
pub fn is_eligible(profile: &RateProfile, package: &ShipmentPackage) -> bool {
    match check(profile, package) {
        Ok(()) => true,
        Err(reason) if reason.is_misconfiguration() => {
            tracing::warn!(reason = %reason, "rate profile misconfigured, skipping quote");
            false
        }
        Err(reason) => {
            tracing::debug!(reason = %reason, "package ineligible for rating");
            false
        }
    }
}

fn check_required_fields(profile: &RateProfile) -> Result<(), Ineligibility> {
    let required = [
        ("api_key", profile.api_key()),
        ("api_secret", profile.api_secret()),
        ("account_number", profile.account_number()),
        ("origin_country_code", profile.origin().country_code()),
        ("origin_postal_code", profile.origin().postal_code()),
    ];
    for (field, value) in required {
        if is_blank(value) {
            return Err(Ineligibility::MissingRequiredField { field });
        }
    }

    // A pinned-but-blank location id can never match any package.
    if profile.stock_location_id().is_some() && is_blank_opt(profile.stock_location_id()) {
        return Err(Ineligibility::MissingRequiredField {
            field: "stock_location_id",
        });
    }

    Ok(())
}

fn check_weight_bounds_config(profile: &RateProfile) -> Result<(), Ineligibility> {
    if let (Some(minimum), Some(maximum)) = (profile.minimum_weight(), profile.maximum_weight())
        && minimum > maximum
    {
        return Err(Ineligibility::InvalidWeightBounds { minimum, maximum });
    }
    Ok(())
}

fn check_stock_location(
    profile: &RateProfile,
    package: &ShipmentPackage,
) -> Result<(), Ineligibility> {
    let Some(pinned) = profile.stock_location_id() else {
        return Ok(());
    };

    let actual = package.stock_location().map(|location| location.id());
    if actual == Some(pinned) {
        Ok(())
    } else {
        Err(Ineligibility::StockLocationMismatch {
            pinned: pinned.to_string(),
            actual: actual.map(str::to_string),
        })
    }
}

fn check_weight(profile: &RateProfile, package: &ShipmentPackage) -> Result<(), Ineligibility> {
    let weight = if package.weight() > 0.0 {
        package.weight()
    } else {
        WEIGHT_FLOOR
    };

    let below = profile.minimum_weight().is_some_and(|min| weight < min);
    let above = profile.maximum_weight().is_some_and(|max| weight > max);
    if below || above {
        return Err(Ineligibility::WeightOutOfBounds {
            weight,
            minimum: profile.minimum_weight(),
            maximum: profile.maximum_weight(),
        });
    }
    Ok(())
}
