//! Error types for the product catalog client.
//!
//! # Design
//! Every failure the source can produce lands in one of four `ApiError`
//! variants so the controller can render a description without looking at
//! transport internals. Any non-200 status is `InvalidResponse`; the body of
//! an error response is never inspected.

use thiserror::Error;

/// Errors returned by `ProductClient` and `ProductSource`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request URL could not be built from the base URL and path.
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String, reason: String },

    /// The server answered with a status other than 200.
    #[error("Invalid response from server (HTTP {status})")]
    InvalidResponse { status: u16 },

    /// The response body did not match the expected envelope.
    #[error("Failed to decode data: {0}")]
    DecodingError(#[source] serde_json::Error),

    /// The transport failed before a response was received.
    #[error("Network error: {0}")]
    NetworkError(#[from] TransportError),
}

/// Failure reported by a `Transport` implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Failure from a non-reqwest transport, described as text.
    #[error("{0}")]
    Other(String),
}

/// Errors raised while loading `CatalogConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
