//! Remote product source: `ProductClient` plus an injected `Transport`.
//!
//! Holds no mutable state, so one instance can be shared behind an `Arc`
//! across any number of concurrent fetches. Failures are never recovered
//! here; they propagate to the caller as `ApiError`.

use tracing::{debug, warn};

use crate::client::ProductClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::Product;

#[derive(Debug, Clone)]
pub struct ProductSource<T> {
    client: ProductClient,
    transport: T,
}

impl<T: Transport> ProductSource<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: ProductClient::new(base_url),
            transport,
        }
    }

    /// Fetch the full catalog in server order.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidUrl`] if the base URL is malformed. No request is sent.
    /// - [`ApiError::NetworkError`] if the transport fails.
    /// - [`ApiError::InvalidResponse`] on any status other than 200.
    /// - [`ApiError::DecodingError`] if the body is not a product list envelope.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let request = self.client.build_list_products()?;
        debug!(url = %request.url, "fetching product list");

        let result = match self.transport.execute(request).await {
            Ok(response) => self.client.parse_list_products(response),
            Err(e) => Err(e.into()),
        };
        match &result {
            Ok(products) => debug!(count = products.len(), "product list fetched"),
            Err(e) => warn!(error = %e, "product list fetch failed"),
        }
        result
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Same as [`ProductSource::list_products`], against the detail envelope.
    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        let request = self.client.build_get_product(id)?;
        debug!(url = %request.url, id, "fetching product");

        let result = match self.transport.execute(request).await {
            Ok(response) => self.client.parse_get_product(response),
            Err(e) => Err(e.into()),
        };
        if let Err(e) = &result {
            warn!(error = %e, id, "product fetch failed");
        }
        result
    }
}
