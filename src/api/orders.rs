//! Order Endpoints
//!
//! Mutations return `()` on purpose: the workflow status is owned by
//! the backend, so callers re-fetch the order instead of patching
//! local state from a response body.

use serde::Serialize;
use web_sys::AbortSignal;

use crate::models::{InvoiceType, Order};

use super::error::ApiError;
use super::http;

#[derive(Debug, Clone, Serialize)]
pub struct NewOrderItem {
    pub product_id: u32,
    pub requested_quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub items: Vec<NewOrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_comment: Option<String>,
    pub business_invoice_type: InvoiceType,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricedItem {
    pub item_id: u32,
    pub quoted_unit_price: f64,
    pub final_quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitPricingRequest {
    pub items: Vec<PricedItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_comment: Option<String>,
}

#[derive(Serialize)]
struct RejectBody {
    reason: String,
}

#[derive(Serialize)]
struct DealerNotesBody {
    dealer_notes: String,
}

/// List orders visible to the current user. The backend scopes the
/// result by role; `status` and `search` narrow it further.
pub async fn list_orders(
    status: Option<&str>,
    search: &str,
    abort: Option<&AbortSignal>,
) -> Result<Vec<Order>, ApiError> {
    let path = http::with_query(
        "/orders/",
        &[
            ("status", status.unwrap_or("").to_string()),
            ("search", search.trim().to_string()),
        ],
    );
    http::get_json(&path, abort).await
}

pub async fn get_order(id: u32, abort: Option<&AbortSignal>) -> Result<Order, ApiError> {
    http::get_json(&format!("/orders/{id}/"), abort).await
}

pub async fn create_order(
    req: &CreateOrderRequest,
    abort: Option<&AbortSignal>,
) -> Result<Order, ApiError> {
    http::post_json("/orders/", req, abort).await
}

pub async fn submit_pricing(
    id: u32,
    req: &SubmitPricingRequest,
    abort: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    http::post_json_ok(&format!("/orders/{id}/submit_pricing/"), req, abort).await
}

pub async fn approve_order(id: u32, abort: Option<&AbortSignal>) -> Result<(), ApiError> {
    http::post_empty_ok(&format!("/orders/{id}/approve/"), abort).await
}

pub async fn reject_order(
    id: u32,
    reason: &str,
    abort: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    let body = RejectBody {
        reason: reason.to_string(),
    };
    http::post_json_ok(&format!("/orders/{id}/reject/"), &body, abort).await
}

pub async fn update_dealer_notes(
    id: u32,
    notes: &str,
    abort: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    let body = DealerNotesBody {
        dealer_notes: notes.to_string(),
    };
    http::post_json_ok(&format!("/orders/{id}/update-dealer-notes/"), &body, abort).await
}
