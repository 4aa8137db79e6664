//! # HTTP Client Wrapper
//!
//! Thin reqwest wrapper for the carrier adapter.
//!
//! Provides a GET-with-query call with Basic authentication, split
//! connect/read timeouts, status-to-error mapping and JSON decoding, so
//! the rating client itself only deals in [`CarrierError`] values.

use crate::infrastructure::carrier::error::{CarrierError, CarrierResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default connect timeout in milliseconds.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;

/// Default read timeout in milliseconds.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;

/// HTTP client wrapper for carrier calls.
///
/// A timed-out or refused connection maps to a retryable error; every
/// other transport fault maps to a connection error. Non-success statuses
/// are mapped to carrier errors by status class.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Connect timeout in milliseconds.
    connect_timeout_ms: u64,
    /// Read timeout in milliseconds.
    read_timeout_ms: u64,
}

impl HttpClient {
    /// Creates a client with the default connect/read timeouts.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::InternalError` if the client cannot be built.
    pub fn new() -> CarrierResult<Self> {
        Self::with_timeouts(DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_READ_TIMEOUT_MS)
    }

    /// Creates a client with explicit connect and read timeouts.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::InternalError` if the client cannot be built.
    pub fn with_timeouts(connect_timeout_ms: u64, read_timeout_ms: u64) -> CarrierResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(connect_timeout_ms))
            .timeout(Duration::from_millis(read_timeout_ms))
            .build()
            .map_err(|e| {
                CarrierError::internal_error(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            connect_timeout_ms,
            read_timeout_ms,
        })
    }

    /// Returns the configured connect timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn connect_timeout_ms(&self) -> u64 {
        self.connect_timeout_ms
    }

    /// Returns the configured read timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn read_timeout_ms(&self) -> u64 {
        self.read_timeout_ms
    }

    /// Makes a Basic-authenticated GET request with query parameters and
    /// decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Timeout`/`Connection` on transport failure,
    /// a status-mapped error on non-success responses, and
    /// `CarrierError::ProtocolError` when the body cannot be decoded.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
        username: &str,
        password: &str,
    ) -> CarrierResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .basic_auth(username, Some(password))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }
}

/// Checks the status and decodes the JSON body.
async fn handle_response<T: DeserializeOwned>(response: Response) -> CarrierResult<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| CarrierError::protocol_error(format!("failed to parse response: {e}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(map_status_error(status, &body))
    }
}

/// Maps a reqwest error to a carrier error.
fn map_reqwest_error(error: reqwest::Error) -> CarrierError {
    if error.is_timeout() {
        CarrierError::timeout("request timed out")
    } else if error.is_connect() {
        CarrierError::connection(format!("connection failed: {error}"))
    } else {
        CarrierError::connection(format!("HTTP request failed: {error}"))
    }
}

/// Maps a non-success status code to a carrier error.
fn map_status_error(status: StatusCode, body: &str) -> CarrierError {
    match status {
        StatusCode::BAD_REQUEST => CarrierError::invalid_request(format!("bad request: {body}")),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CarrierError::authentication(format!("authentication failed: {body}"))
        }
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => {
            CarrierError::connection(format!("server error ({status}): {body}"))
        }
        _ => CarrierError::protocol_error(format!("HTTP error ({status}): {body}")),
    }
}
