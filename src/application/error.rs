//! # Application Errors
//!
//! Error type for the quote computation pipeline.
//!
//! The orchestrator works in `Result` internally so every failure stays
//! classified — carrier fault versus internal fault — and only its public
//! boundary collapses them to "no rate". Nothing above the orchestrator
//! ever observes an error value.
//!
//! # Examples
//!
//! ```
//! use dhl_rates::application::error::RateError;
//! use dhl_rates::infrastructure::carrier::error::CarrierError;
//!
//! let error: RateError = CarrierError::timeout("timed out").into();
//! assert!(error.is_retryable());
//! ```

use crate::infrastructure::carrier::error::CarrierError;
use thiserror::Error;

/// Error raised inside the quote computation pipeline.
#[derive(Debug, Error)]
pub enum RateError {
    /// The carrier call failed.
    #[error("carrier error: {0}")]
    Carrier(#[from] CarrierError),

    /// Any other fault inside the pipeline.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RateError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if the next identical call might succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Carrier(e) => e.is_retryable(),
            Self::Internal(_) => false,
        }
    }
}

/// Result type for quote computation.
pub type RateResult<T> = Result<T, RateError>;
