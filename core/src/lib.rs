//! Product catalog client core.
//!
//! # Overview
//! Fetches a product catalog from a remote HTTP API and exposes the
//! presentation state a view renders: the product list, the selected
//! product, a loading flag and a dismissible error.
//!
//! # Design
//! - `ProductClient` is stateless: `build_*` produces requests, `parse_*`
//!   validates and decodes responses. No I/O.
//! - `ProductSource` runs the round-trip through an injected `Transport`.
//!   `ReqwestTransport` is the production implementation; tests inject stubs.
//! - `ProductController` owns the observable `ControllerState` and turns
//!   every failure into a display string. Callers never see an `Err`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod source;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::ProductClient;
pub use config::{load_config, CatalogConfig, DEFAULT_BASE_URL};
pub use controller::{ControllerState, ListPhase, LoadOrdering, ProductController};
pub use error::{ApiError, ConfigError, TransportError};
pub use http::{HttpRequest, HttpResponse, Transport};
pub use source::ProductSource;
pub use transport::ReqwestTransport;
pub use types::{Badge, Product, ProductDetailResponse, ProductListResponse};
