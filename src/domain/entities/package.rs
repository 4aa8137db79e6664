//! # Shipment Package
//!
//! The per-quote shipment input supplied by the order data layer.
//!
//! A package carries the destination address, the order currency, the
//! package's total weight, its content lines (each with per-item
//! dimensions and a quantity) and, when the host ships from multiple
//! warehouses, the originating stock location. The crate never mutates a
//! package.
//!
//! # Examples
//!
//! ```
//! use dhl_rates::domain::entities::package::{ContentLine, ItemDimensions, ShipmentPackage};
//! use dhl_rates::domain::value_objects::address::Address;
//!
//! let package = ShipmentPackage::new(1.5, "USD")
//!     .with_destination(Address::new("DE", "10115").with_city("Berlin"))
//!     .with_content(ContentLine::new(ItemDimensions::new(10.0, 5.0, 3.0), 1));
//!
//! assert_eq!(package.weight(), 1.5);
//! assert_eq!(package.contents().len(), 1);
//! ```

use crate::domain::value_objects::address::Address;
use serde::{Deserialize, Serialize};

/// Physical dimensions of a single item variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemDimensions {
    /// Item depth (becomes parcel length).
    depth: f64,
    /// Item width.
    width: f64,
    /// Item height.
    height: f64,
}

impl ItemDimensions {
    /// Creates item dimensions.
    #[must_use]
    pub fn new(depth: f64, width: f64, height: f64) -> Self {
        Self {
            depth,
            width,
            height,
        }
    }

    /// Returns the item depth.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Returns the item width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the item height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// One content line of a package: an item variant and its quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentLine {
    /// Dimensions of the item variant.
    dimensions: ItemDimensions,
    /// Number of units on this line.
    quantity: u32,
}

impl ContentLine {
    /// Creates a content line.
    #[must_use]
    pub fn new(dimensions: ItemDimensions, quantity: u32) -> Self {
        Self {
            dimensions,
            quantity,
        }
    }

    /// Returns the item dimensions.
    #[must_use]
    pub fn dimensions(&self) -> ItemDimensions {
        self.dimensions
    }

    /// Returns the line quantity.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// The stock location a package ships from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLocation {
    /// Location identifier.
    id: String,
    /// Location address.
    address: Address,
}

impl StockLocation {
    /// Creates a stock location.
    #[must_use]
    pub fn new(id: impl Into<String>, address: Address) -> Self {
        Self {
            id: id.into(),
            address,
        }
    }

    /// Returns the location identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the location address.
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }
}

/// A shipment package awaiting a rate quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentPackage {
    /// Destination address; absent until the buyer enters one.
    destination: Option<Address>,
    /// Order-level currency. May be blank.
    currency: String,
    /// Total package weight as reported by the order layer.
    weight: f64,
    /// Content lines.
    contents: Vec<ContentLine>,
    /// Originating stock location, when the host tracks one.
    stock_location: Option<StockLocation>,
}

impl ShipmentPackage {
    /// Creates a package with the given total weight and order currency.
    #[must_use]
    pub fn new(weight: f64, currency: impl Into<String>) -> Self {
        Self {
            destination: None,
            currency: currency.into(),
            weight,
            contents: Vec::new(),
            stock_location: None,
        }
    }

    /// Sets the destination address.
    #[must_use]
    pub fn with_destination(mut self, destination: Address) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Appends a content line.
    #[must_use]
    pub fn with_content(mut self, line: ContentLine) -> Self {
        self.contents.push(line);
        self
    }

    /// Replaces the content lines.
    #[must_use]
    pub fn with_contents(mut self, contents: Vec<ContentLine>) -> Self {
        self.contents = contents;
        self
    }

    /// Sets the originating stock location.
    #[must_use]
    pub fn with_stock_location(mut self, location: StockLocation) -> Self {
        self.stock_location = Some(location);
        self
    }

    /// Returns the destination address, if present.
    #[must_use]
    pub fn destination(&self) -> Option<&Address> {
        self.destination.as_ref()
    }

    /// Returns the order currency.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the reported total weight.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the content lines.
    #[must_use]
    pub fn contents(&self) -> &[ContentLine] {
        &self.contents
    }

    /// Returns the originating stock location, if present.
    #[must_use]
    pub fn stock_location(&self) -> Option<&StockLocation> {
        self.stock_location.as_ref()
    }
}
