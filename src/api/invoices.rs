//! Invoice Endpoints
//!
//! Invoices arrive as PDF bytes. Download goes through a temporary
//! object URL on a synthetic anchor; preview opens the object URL in a
//! new tab and revokes it after a grace period so the viewer can load.

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AbortSignal, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::error::ApiError;
use super::http::{self, BinaryPayload};

/// How long a preview tab gets to load the PDF before its URL is revoked
const PREVIEW_URL_TTL_MS: u32 = 60_000;

pub async fn download_invoice(order_id: u32, abort: Option<&AbortSignal>) -> Result<(), ApiError> {
    let payload =
        http::get_binary(&format!("/orders/{order_id}/download-invoice/"), abort).await?;
    let file_name = format!(
        "invoice_{}_{}.pdf",
        order_id,
        Utc::now().format("%Y%m%d_%H%M%S")
    );
    if let Err(e) = save_via_anchor(&payload, &file_name) {
        web_sys::console::error_1(&format!("[INVOICE] save failed: {e:?}").into());
    }
    Ok(())
}

pub async fn preview_invoice(order_id: u32, abort: Option<&AbortSignal>) -> Result<(), ApiError> {
    let payload =
        http::get_binary(&format!("/orders/{order_id}/preview-invoice/"), abort).await?;
    match open_in_new_tab(&payload) {
        Ok(url) => {
            spawn_local(async move {
                TimeoutFuture::new(PREVIEW_URL_TTL_MS).await;
                let _ = Url::revoke_object_url(&url);
            });
            Ok(())
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[INVOICE] preview failed: {e:?}").into());
            Ok(())
        }
    }
}

fn make_blob(payload: &BinaryPayload) -> Result<Blob, JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(payload.bytes.as_slice()));
    let props = BlobPropertyBag::new();
    props.set_type(payload.content_type.as_deref().unwrap_or("application/pdf"));
    Blob::new_with_u8_array_sequence_and_options(&parts, &props)
}

fn save_via_anchor(payload: &BinaryPayload, file_name: &str) -> Result<(), JsValue> {
    let blob = make_blob(payload)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    Url::revoke_object_url(&url)?;
    Ok(())
}

/// Returns the object URL so the caller can schedule its revocation.
fn open_in_new_tab(payload: &BinaryPayload) -> Result<String, JsValue> {
    let blob = make_blob(payload)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    if window.open_with_url_and_target(&url, "_blank")?.is_none() {
        // Popup blocked; revoke now instead of leaking the URL
        let _ = Url::revoke_object_url(&url);
        return Err(JsValue::from_str("popup blocked"));
    }
    Ok(url)
}
