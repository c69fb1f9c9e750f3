//! Catalog Endpoints

use web_sys::AbortSignal;

use crate::models::{Category, Product, ShipmentAnnouncement};

use super::error::ApiError;
use super::http;

/// One page of the catalog. `has_more` is inferred by the caller from
/// the received count versus the requested limit.
pub async fn list_products(
    search: &str,
    category: Option<u32>,
    limit: u32,
    offset: u32,
    abort: Option<&AbortSignal>,
) -> Result<Vec<Product>, ApiError> {
    let path = http::with_query(
        "/products/",
        &[
            ("search", search.trim().to_string()),
            (
                "category",
                category.map(|c| c.to_string()).unwrap_or_default(),
            ),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ],
    );
    http::get_json(&path, abort).await
}

pub async fn list_categories(abort: Option<&AbortSignal>) -> Result<Vec<Category>, ApiError> {
    http::get_json("/products/categories/", abort).await
}

pub async fn new_arrivals(abort: Option<&AbortSignal>) -> Result<Vec<Product>, ApiError> {
    http::get_json("/products/new-arrivals/", abort).await
}

pub async fn shipment_announcements(
    abort: Option<&AbortSignal>,
) -> Result<Vec<ShipmentAnnouncement>, ApiError> {
    http::get_json("/shipment-announcements/", abort).await
}
