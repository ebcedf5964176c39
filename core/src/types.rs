//! Domain DTOs for the product catalog API.
//!
//! # Design
//! These types mirror the wire envelope but are defined independently from
//! the mock-server crate. Integration tests catch any schema drift between
//! the two. Optional product flags stay `Option` so "absent" never collapses
//! into `false` or `0`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single catalog product returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub image: String,
    /// Non-negative on the wire. Not checked when decoding.
    pub price: f64,
    pub description: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub category: String,
    /// Discount percentage. `None` means the product is not discounted.
    #[serde(default)]
    pub discount: Option<i64>,
    #[serde(default)]
    pub popular: Option<bool>,
    #[serde(default, rename = "onSale")]
    pub on_sale: Option<bool>,
}

impl Product {
    /// Price rendered with a dollar sign and two decimals, e.g. `$19.99`.
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Badges to show next to the product, in display order.
    ///
    /// A flag that is absent or explicitly `false` produces no badge.
    pub fn badges(&self) -> Vec<Badge> {
        let mut badges = Vec::new();
        if let Some(percent) = self.discount {
            badges.push(Badge::Discount(percent));
        }
        if self.popular == Some(true) {
            badges.push(Badge::Popular);
        }
        if self.on_sale == Some(true) {
            badges.push(Badge::OnSale);
        }
        badges
    }
}

/// Short label attached to a product in list and detail views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Discount(i64),
    Popular,
    OnSale,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::Discount(percent) => write!(f, "{percent}% OFF"),
            Badge::Popular => write!(f, "POPULAR"),
            Badge::OnSale => write!(f, "ON SALE"),
        }
    }
}

/// Envelope returned by `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductListResponse {
    pub status: String,
    pub message: String,
    pub products: Vec<Product>,
}

/// Envelope returned by `GET /products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetailResponse {
    pub status: String,
    pub message: String,
    pub product: Product,
}
