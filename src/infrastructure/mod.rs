//! # Infrastructure Layer
//!
//! Adapters for the outside world: the carrier rating API and the quote
//! cache.

pub mod cache;
pub mod carrier;
