//! # Application Layer
//!
//! Use-case orchestration over the domain and infrastructure layers.

pub mod error;
pub mod services;

pub use error::{RateError, RateResult};
