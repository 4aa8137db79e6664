//! # Domain Layer
//!
//! Core business types and pure services for shipping rate quoting.
//!
//! This layer has no I/O. It defines the shipment and configuration model
//! and the two pure reductions over it: eligibility checking and package
//! aggregation.

pub mod entities;
pub mod services;
pub mod value_objects;
