//! # dhl-rates
//!
//! Shipping rate quoting against the DHL Express (MyDHL) rating API.
//!
//! The crate computes a best-effort point quote for a shipment: it filters
//! out ineligible shipments before spending a network call, reduces
//! heterogeneous package contents into a single billable parcel, caches
//! results under a deterministic key, and contains every failure so that
//! callers observe "no rate" instead of an error.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! - **Domain**: value objects ([`Address`], [`BillableParcel`]), entities
//!   ([`RateProfile`], [`ShipmentPackage`]) and pure services (eligibility
//!   checking, package aggregation).
//! - **Application**: the [`RateCalculator`] orchestrator and cache key
//!   derivation.
//! - **Infrastructure**: the [`DhlExpressClient`] carrier adapter and the
//!   [`RateCache`] port with its in-memory implementation.
//!
//! # Quick Start
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
//! let profile = RateProfile::new("api-key", "api-secret", "123456789")
//!     .with_origin(Address::new("US", "10001").with_city("New York"));
//!
//! let package = ShipmentPackage::new(1.5, "USD")
//!     .with_destination(Address::new("DE", "10115").with_city("Berlin"));
//!
//! let calculator = RateCalculator::new(Arc::new(InMemoryRateCache::new()))?;
//! let quote = calculator.compute_price(&profile, &package).await;
//! # Ok(())
//! # }
//! ```
//!
//! A quote of `None` means the shipping method is unavailable for this
//! shipment; the reason (missing credentials, carrier outage, no matching
//! product) is logged through `tracing` but never surfaced as an error.
//!
//! [`Address`]: domain::value_objects::address::Address
//! [`BillableParcel`]: domain::value_objects::parcel::BillableParcel
//! [`RateProfile`]: domain::entities::profile::RateProfile
//! [`ShipmentPackage`]: domain::entities::package::ShipmentPackage
//! [`RateCalculator`]: application::services::rate_calculator::RateCalculator
//! [`DhlExpressClient`]: infrastructure::carrier::client::DhlExpressClient
//! [`RateCache`]: infrastructure::cache::RateCache

pub mod application;
pub mod domain;
pub mod infrastructure;
