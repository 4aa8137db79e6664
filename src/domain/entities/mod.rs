//! # Domain Entities
//!
//! Configuration and shipment inputs to the rate pipeline.
//!
//! - [`RateProfile`]: operator-configured carrier profile
//! - [`ShipmentPackage`]: per-quote shipment input with content lines
//!
//! [`RateProfile`]: profile::RateProfile
//! [`ShipmentPackage`]: package::ShipmentPackage

pub mod package;
pub mod profile;

pub use package::{ContentLine, ItemDimensions, ShipmentPackage, StockLocation};
pub use profile::RateProfile;
