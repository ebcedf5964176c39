//! HTTP transport types and the `Transport` seam.
//!
//! # Design
//! Requests and responses are plain data. `ProductClient` builds
//! `HttpRequest` values and parses `HttpResponse` values without touching
//! the network; a `Transport` executes the round-trip in between. Tests swap
//! in stub transports, production uses `ReqwestTransport`.
//!
//! The catalog API is read-only, so every request is a body-less GET.

use std::future::Future;

use reqwest::Url;

use crate::error::TransportError;

/// A GET request described as plain data.
///
/// Built by `ProductClient::build_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Any status, including 4xx/5xx, is a successful round-trip at this level;
/// status interpretation belongs to `ProductClient::parse_*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Shorthand for a response with no headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}

/// Executes an `HttpRequest` and returns the raw response.
///
/// Implementations must return non-2xx responses as `Ok`; `Err` is reserved
/// for failures where no response was received.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        (**self).execute(request)
    }
}
