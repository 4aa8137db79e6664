//! # Package Aggregation
//!
//! Reduces heterogeneous package contents into one billable parcel.
//!
//! A carrier quotes a single parcel, so the many items of a shipment are
//! collapsed into one weight/dimension tuple:
//!
//! - **weight**: the package's reported total, falling back to the minimum
//!   chargeable weight when non-positive;
//! - **length**: the maximum single-item depth — a parcel is as long as
//!   its longest item, items are not laid end to end;
//! - **width**: the maximum single-item width, same reasoning;
//! - **height**: the sum of item height times quantity — units stack.
//!
//! The max/max/sum asymmetry models boxed-and-stacked freight and is part
//! of the quoting contract; changing it silently changes every cached key
//! and every quoted price.
//!
//! # Examples
//!
//! ```
//! use dhl_rates::domain::entities::package::{ContentLine, ItemDimensions, ShipmentPackage};
//! use dhl_rates::domain::services::aggregation::aggregate;
//!
//! let package = ShipmentPackage::new(1.5, "USD")
//!     .with_content(ContentLine::new(ItemDimensions::new(10.0, 5.0, 3.0), 1))
//!     .with_content(ContentLine::new(ItemDimensions::new(4.0, 8.0, 3.0), 2));
//!
//! let parcel = aggregate(&package);
//! assert_eq!(parcel.length(), 10.0); // max depth
//! assert_eq!(parcel.width(), 8.0);   // max width
//! assert_eq!(parcel.height(), 9.0);  // 3*1 + 3*2
//! ```

use crate::domain::entities::package::ShipmentPackage;
use crate::domain::value_objects::parcel::BillableParcel;

/// Reduces a package's contents into a single billable parcel.
///
/// Pure and total: degenerate inputs (no contents, zero weight) produce a
/// parcel at the minimum chargeable floors rather than an error.
#[must_use]
pub fn aggregate(package: &ShipmentPackage) -> BillableParcel {
    let mut length = 0.0_f64;
    let mut width = 0.0_f64;
    let mut height = 0.0_f64;

    for line in package.contents() {
        let dims = line.dimensions();
        length = length.max(dims.depth());
        width = width.max(dims.width());
        height += dims.height() * f64::from(line.quantity().max(1));
    }

    BillableParcel::new(package.weight(), length, width, height)
}
