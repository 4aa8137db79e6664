//! # Carrier Adapter
//!
//! The outbound integration with the DHL Express (MyDHL) rating API.
//!
//! - [`client`]: the rating client and response reduction
//! - [`types`]: the request snapshot and wire response shapes
//! - [`http_client`]: reqwest wrapper with timeouts and error mapping
//! - [`error`]: the carrier failure taxonomy

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::{DhlExpressClient, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
pub use error::{CarrierError, CarrierResult};
pub use http_client::HttpClient;
pub use types::{RateRequest, RatesResponse};
