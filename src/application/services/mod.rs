//! # Application Services
//!
//! Orchestration of the quote pipeline.
//!
//! - [`rate_calculator`]: the [`RateCalculator`] composing eligibility,
//!   aggregation, caching and the carrier client
//! - [`cache_key`]: deterministic cache key derivation
//!
//! [`RateCalculator`]: rate_calculator::RateCalculator

pub mod cache_key;
pub mod rate_calculator;

pub use cache_key::build_key;
pub use rate_calculator::{RateCalculator, DEFAULT_CURRENCY};
