//! # Carrier Errors
//!
//! Error types for carrier rating calls.
//!
//! Every way a rating call can fail — transport, authentication, protocol,
//! or simply no quotable product — is a variant here. The client's public
//! surface collapses all of them to "no rate"; the structured error exists
//! so logs and tests can tell the cases apart.
//!
//! # Examples
//!
//! ```
//! use dhl_rates::infrastructure::carrier::error::CarrierError;
//!
//! let error = CarrierError::timeout("request timed out after 10s");
//! assert!(error.is_retryable());
//!
//! let error = CarrierError::authentication("invalid API key");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for carrier rating operations.
#[derive(Debug, Clone, Error)]
pub enum CarrierError {
    /// Request timed out (connect or read).
    #[error("carrier timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("carrier connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Authentication or authorization failure.
    #[error("carrier authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// The carrier rejected the request parameters.
    #[error("carrier invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// Unexpected status code or undecodable response body.
    #[error("carrier protocol error: {message}")]
    ProtocolError {
        /// Error message.
        message: String,
    },

    /// The response contained no quotable product.
    ///
    /// Covers an empty product list, a list emptied by the product-code
    /// filter, and products without a billed-currency price entry.
    #[error("carrier returned no quotable product: {message}")]
    NoQuote {
        /// Error message.
        message: String,
    },

    /// Internal client error.
    #[error("carrier internal error: {message}")]
    InternalError {
        /// Error message.
        message: String,
    },
}

impl CarrierError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol_error(message: impl Into<String>) -> Self {
        Self::ProtocolError {
            message: message.into(),
        }
    }

    /// Creates a no-quote error.
    #[must_use]
    pub fn no_quote(message: impl Into<String>) -> Self {
        Self::NoQuote {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Returns true if a retry might succeed.
    ///
    /// Transient transport faults are retryable; a rejected request or a
    /// response with no quotable product is not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connection { .. })
    }

    /// Returns true if the request itself was at fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::InvalidRequest { .. }
        )
    }
}

/// Result type for carrier operations.
pub type CarrierResult<T> = Result<T, CarrierError>;
