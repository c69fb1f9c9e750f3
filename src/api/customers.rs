//! Billing Profile Endpoints

use web_sys::AbortSignal;

use crate::models::CustomerInfo;

use super::error::ApiError;
use super::http;

pub async fn get_invoice_info(abort: Option<&AbortSignal>) -> Result<CustomerInfo, ApiError> {
    http::get_json("/customers/invoice-info/", abort).await
}

pub async fn update_invoice_info(
    info: &CustomerInfo,
    abort: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    http::post_json_ok("/customers/update-invoice-info/", info, abort).await
}
