//! Payment Receipt Endpoints

use web_sys::{AbortSignal, FormData};

use crate::models::PaymentReceipt;

use super::error::ApiError;
use super::http;

/// Multipart field name the backend reads the files from
pub const UPLOAD_FIELD: &str = "payment_receipts";

pub async fn list_receipts(
    order_id: u32,
    abort: Option<&AbortSignal>,
) -> Result<Vec<PaymentReceipt>, ApiError> {
    http::get_json(&format!("/orders/{order_id}/payment-receipts/"), abort).await
}

/// Upload a validated batch. Files go out in one multipart request,
/// all under [`UPLOAD_FIELD`].
pub async fn upload_receipts(
    order_id: u32,
    files: &[web_sys::File],
    abort: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    for file in files {
        form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }
    http::post_form_data(
        &format!("/orders/{order_id}/upload-payment-receipt/"),
        form,
        abort,
    )
    .await
}

pub async fn delete_receipt(
    order_id: u32,
    receipt_id: u32,
    abort: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    http::delete_ok(
        &format!("/orders/{order_id}/delete-payment-receipt/{receipt_id}/"),
        abort,
    )
    .await
}
