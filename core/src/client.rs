//! Stateless HTTP request builder and response parser for the catalog API.
//!
//! # Design
//! `ProductClient` holds only a `base_url` and carries no mutable state
//! between calls. Each endpoint is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `ProductSource` runs the round-trip in between, keeping
//! this half deterministic and free of I/O.

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Product, ProductDetailResponse, ProductListResponse};

/// Synchronous, stateless client for the catalog API.
#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET {base}/products`
    pub fn build_list_products(&self) -> Result<HttpRequest, ApiError> {
        self.build_get(&format!("{}/products", self.base_url))
    }

    /// `GET {base}/products/{id}`
    pub fn build_get_product(&self, id: i64) -> Result<HttpRequest, ApiError> {
        self.build_get(&format!("{}/products/{id}", self.base_url))
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        let envelope: ProductListResponse = decode_ok(&response)?;
        Ok(envelope.products)
    }

    pub fn parse_get_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        let envelope: ProductDetailResponse = decode_ok(&response)?;
        Ok(envelope.product)
    }

    fn build_get(&self, raw: &str) -> Result<HttpRequest, ApiError> {
        let url = Url::parse(raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        Ok(HttpRequest {
            url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }
}

/// Reject anything but 200, then decode the body as `T`.
fn decode_ok<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    if response.status != 200 {
        return Err(ApiError::InvalidResponse {
            status: response.status,
        });
    }
    serde_json::from_slice(&response.body).map_err(ApiError::DecodingError)
}
