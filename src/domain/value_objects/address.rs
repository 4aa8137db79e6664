//! # Address Value Object
//!
//! Postal address fields relevant to carrier rating.
//!
//! The rating API only needs country, postal code and (optionally) city,
//! so this type carries nothing else. Street-level detail belongs to the
//! order data layer, which is outside this crate.
//!
//! # Examples
//!
//! ```
//! use dhl_rates::domain::value_objects::address::Address;
//!
//! let address = Address::new("DE", "10115").with_city("Berlin");
//!
//! assert_eq!(address.country_code(), "DE");
//! assert_eq!(address.city(), Some("Berlin"));
//! assert!(address.has_country());
//! ```

use serde::{Deserialize, Serialize};

/// A rating-relevant postal address.
///
/// Country code is expected to be an ISO 3166-1 alpha-2 code; the crate
/// treats it as opaque apart from blank checks and the case-insensitive
/// comparison used for customs derivation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// ISO country code.
    country_code: String,
    /// Postal or ZIP code.
    postal_code: String,
    /// City name, where the carrier wants one.
    city: Option<String>,
}

impl Address {
    /// Creates an address from country and postal code.
    #[must_use]
    pub fn new(country_code: impl Into<String>, postal_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            postal_code: postal_code.into(),
            city: None,
        }
    }

    /// Sets the city name.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Returns the ISO country code.
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Returns the postal code.
    #[must_use]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Returns the city, if set.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Returns the city, or an empty string when unset.
    #[must_use]
    pub fn city_or_default(&self) -> &str {
        self.city.as_deref().unwrap_or("")
    }

    /// Returns true if the country code is non-blank.
    #[must_use]
    pub fn has_country(&self) -> bool {
        !self.country_code.trim().is_empty()
    }
}
