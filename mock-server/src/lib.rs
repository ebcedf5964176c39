use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub price: f64,
    pub description: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
    #[serde(rename = "onSale", skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductList {
    pub status: String,
    pub message: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductDetail {
    pub status: String,
    pub message: String,
    pub product: Product,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
}

pub type Catalog = Arc<Vec<Product>>;

/// Router over the built-in catalog.
pub fn app() -> Router {
    app_with(seed_catalog())
}

/// Router over a caller-supplied catalog, served in the given order.
pub fn app_with(products: Vec<Product>) -> Router {
    let catalog: Catalog = Arc::new(products);
    Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, products: Vec<Product>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(products)).await
}

async fn list_products(State(catalog): State<Catalog>) -> Json<ProductList> {
    tracing::debug!(count = catalog.len(), "serving product list");
    Json(ProductList {
        status: "SUCCESS".to_string(),
        message: format!("Here you go! You've received {} products.", catalog.len()),
        products: catalog.as_ref().clone(),
    })
}

async fn get_product(
    State(catalog): State<Catalog>,
    Path(id): Path<i64>,
) -> Result<Json<ProductDetail>, (StatusCode, Json<ErrorBody>)> {
    let product = catalog.iter().find(|p| p.id == id).cloned().ok_or_else(|| {
        tracing::debug!(id, "product not found");
        (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                status: "error".to_string(),
                message: "product not found".to_string(),
            }),
        )
    })?;
    Ok(Json(ProductDetail {
        status: "SUCCESS".to_string(),
        message: format!("Here you go! You've received product with id {id}"),
        product,
    }))
}

/// Three products covering every combination of optional fields the
/// catalog API sends.
pub fn seed_catalog() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            title: "Sony WH-1000XM3 Bluetooth Wireless Over Ear Headphones".to_string(),
            image: "https://storage.googleapis.com/fir-auth-1c3bc.appspot.com/1692947383286-714WUJlhbLS._SL1500_.jpg".to_string(),
            price: 773.0,
            description: "Digital noise cancelling headphones with 30 hours of battery life.".to_string(),
            brand: "sony".to_string(),
            model: "WH-1000XM3".to_string(),
            color: "silver".to_string(),
            category: "audio".to_string(),
            discount: Some(11),
            popular: None,
            on_sale: None,
        },
        Product {
            id: 2,
            title: "Microsoft Xbox X/S Wireless Controller Robot White".to_string(),
            image: "https://storage.googleapis.com/fir-auth-1c3bc.appspot.com/1692255251854-xbox.jpg".to_string(),
            price: 57.0,
            description: "Experience the modernized design of the Xbox Wireless Controller.".to_string(),
            brand: "microsoft".to_string(),
            model: "Xbox X/S".to_string(),
            color: "white".to_string(),
            category: "gaming".to_string(),
            discount: Some(4),
            popular: Some(true),
            on_sale: None,
        },
        Product {
            id: 3,
            title: "Logitech G733 Lightspeed Wireless Gaming Headset".to_string(),
            image: "https://storage.googleapis.com/fir-auth-1c3bc.appspot.com/1692257709689-logitech heaphone.jpg".to_string(),
            price: 384.0,
            description: "Total freedom with up to 20 m wireless range.".to_string(),
            brand: "logitech G".to_string(),
            model: "G733".to_string(),
            color: "white".to_string(),
            category: "gaming".to_string(),
            discount: None,
            popular: None,
            on_sale: Some(true),
        },
    ]
}
