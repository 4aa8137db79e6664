//! # Domain Enums
//!
//! Enumeration types for rating policy knobs.
//!
//! - [`UnitOfMeasurement`] - Metric or imperial units for weight/dimensions
//! - [`ShippingDatePolicy`] - How the planned shipping date is derived
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {0} value: {1}")]
pub struct ParseEnumError(pub &'static str, pub String);

/// Unit system for weight and dimensions.
///
/// The crate performs no conversion; the unit system is passed through to
/// the carrier so it interprets the parcel measurements correctly.
///
/// # Examples
///
/// ```
/// use dhl_rates::domain::value_objects::enums::UnitOfMeasurement;
///
/// assert_eq!(UnitOfMeasurement::Metric.as_str(), "metric");
/// assert_eq!("imperial".parse(), Ok(UnitOfMeasurement::Imperial));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfMeasurement {
    /// Kilograms and centimetres.
    #[default]
    Metric,
    /// Pounds and inches.
    Imperial,
}

impl UnitOfMeasurement {
    /// Returns the wire representation expected by the rating API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitOfMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnitOfMeasurement {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            _ => Err(ParseEnumError("UnitOfMeasurement", s.to_string())),
        }
    }
}

/// Policy for deriving the planned shipping date sent to the carrier.
///
/// Two generations of carrier profiles exist in the wild: one ships "today"
/// unconditionally, the other never plans a pickup on a weekend. The policy
/// is an explicit profile field so a deployment picks one deliberately
/// instead of inheriting whichever variant happened to be installed.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dhl_rates::domain::value_objects::enums::ShippingDatePolicy;
///
/// // 2026-08-08 is a Saturday.
/// let saturday = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
///
/// assert_eq!(ShippingDatePolicy::AsIs.planned_date(saturday), saturday);
/// assert_eq!(ShippingDatePolicy::SkipWeekends.planned_date(saturday), monday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingDatePolicy {
    /// Ship on the current date, whatever day it falls on.
    #[default]
    AsIs,
    /// Advance Saturday and Sunday to the following Monday.
    SkipWeekends,
}

impl ShippingDatePolicy {
    /// Derives the planned shipping date from the given current date.
    #[must_use]
    pub fn planned_date(self, today: chrono::NaiveDate) -> chrono::NaiveDate {
        use chrono::{Datelike, Days, Weekday};

        match self {
            Self::AsIs => today,
            Self::SkipWeekends => match today.weekday() {
                Weekday::Sat => today.checked_add_days(Days::new(2)).unwrap_or(today),
                Weekday::Sun => today.checked_add_days(Days::new(1)).unwrap_or(today),
                _ => today,
            },
        }
    }

    /// Returns the wire value of the carrier's `nextBusinessDay` flag.
    ///
    /// The flag tracks the profile generation each policy was observed
    /// with: shipping "as is" asks the carrier to roll to the next
    /// business day itself, while the weekend-skipping policy already did.
    #[must_use]
    pub const fn next_business_day(self) -> bool {
        match self {
            Self::AsIs => true,
            Self::SkipWeekends => false,
        }
    }

    /// Returns the policy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AsIs => "as_is",
            Self::SkipWeekends => "skip_weekends",
        }
    }
}

impl fmt::Display for ShippingDatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShippingDatePolicy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "as_is" => Ok(Self::AsIs),
            "skip_weekends" => Ok(Self::SkipWeekends),
            _ => Err(ParseEnumError("ShippingDatePolicy", s.to_string())),
        }
    }
}
