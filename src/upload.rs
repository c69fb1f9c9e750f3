//! Receipt Upload Support
//!
//! Client-side validation for receipt files and the bookkeeping for
//! their preview URLs. Images are previewed through data URLs (no
//! cleanup needed); PDFs get object URLs, which must be revoked on
//! every exit path. The ledger makes each URL revocable exactly once.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::models::ReceiptFileType;

pub const MAX_FILES_PER_BATCH: usize = 10;
pub const MAX_FILE_BYTES: u64 = 15 * 1024 * 1024;

pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "application/pdf",
];

pub fn classify_mime(mime: &str) -> Option<ReceiptFileType> {
    match mime {
        "image/jpeg" | "image/png" | "image/gif" | "image/webp" => Some(ReceiptFileType::Image),
        "application/pdf" => Some(ReceiptFileType::Pdf),
        _ => None,
    }
}

/// Check one picked file against the type and size rules. `Err` carries
/// the Persian message to add to the rejection list.
pub fn validate_file(name: &str, mime: &str, size: u64) -> Result<ReceiptFileType, String> {
    let Some(kind) = classify_mime(mime) else {
        return Err(format!(
            "نوع فایل «{name}» مجاز نیست. فقط تصویر (JPEG، PNG، GIF، WebP) یا PDF."
        ));
    };
    if size > MAX_FILE_BYTES {
        return Err(format!("حجم فایل «{name}» بیش از ۱۵ مگابایت است."));
    }
    Ok(kind)
}

pub fn batch_full_message() -> String {
    format!("حداکثر {MAX_FILES_PER_BATCH} فایل در هر نوبت قابل ارسال است.")
}

// ========================
// Object URL Ledger
// ========================

/// Pure bookkeeping for object URLs: each inserted URL leaves exactly
/// once, either removed individually or drained in bulk.
#[derive(Debug, Default)]
pub struct UrlLedger {
    urls: Vec<String>,
}

impl UrlLedger {
    pub fn insert(&mut self, url: String) {
        self.urls.push(url);
    }

    /// Take one URL out, if present.
    pub fn remove(&mut self, url: &str) -> Option<String> {
        let idx = self.urls.iter().position(|u| u == url)?;
        Some(self.urls.remove(idx))
    }

    /// Take everything out.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.urls)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

thread_local! {
    static LEDGERS: RefCell<HashMap<u32, UrlLedger>> = RefCell::new(HashMap::new());
}

static NEXT_LEDGER_KEY: AtomicU32 = AtomicU32::new(1);

/// Handle to a registered ledger. Copyable so `on_cleanup` closures can
/// carry just the key.
#[derive(Clone, Copy)]
pub struct PreviewUrls {
    key: u32,
}

impl PreviewUrls {
    pub fn new() -> Self {
        let key = NEXT_LEDGER_KEY.fetch_add(1, Ordering::Relaxed);
        LEDGERS.with(|map| {
            map.borrow_mut().insert(key, UrlLedger::default());
        });
        PreviewUrls { key }
    }

    pub fn key(&self) -> u32 {
        self.key
    }

    /// Mint an object URL for the blob and record it.
    pub fn create_for(&self, blob: &web_sys::Blob) -> Result<String, String> {
        let url = web_sys::Url::create_object_url_with_blob(blob)
            .map_err(|e| format!("{e:?}"))?;
        LEDGERS.with(|map| {
            if let Some(ledger) = map.borrow_mut().get_mut(&self.key) {
                ledger.insert(url.clone());
            }
        });
        Ok(url)
    }

    /// Revoke one URL (file removed from the batch).
    pub fn revoke(&self, url: &str) {
        let taken = LEDGERS.with(|map| {
            map.borrow_mut()
                .get_mut(&self.key)
                .and_then(|ledger| ledger.remove(url))
        });
        if let Some(url) = taken {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
    }

    /// Revoke everything still outstanding (close, success, unmount).
    pub fn revoke_all(&self) {
        revoke_ledger(self.key);
    }
}

/// Static entry point for `on_cleanup`; keeps the ledger registered so
/// the handle stays usable if the view remounts.
pub fn revoke_ledger(key: u32) {
    let urls = LEDGERS.with(|map| {
        map.borrow_mut()
            .get_mut(&key)
            .map(|ledger| ledger.drain())
            .unwrap_or_default()
    });
    for url in urls {
        let _ = web_sys::Url::revoke_object_url(&url);
    }
}

// ========================
// File Reading
// ========================

/// Read a picked file into a data URL for inline image previews.
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let reader = web_sys::FileReader::new().map_err(|e| format!("{e:?}"))?;
    let reader_for_cb = reader.clone();
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let reader_ok = reader_for_cb.clone();
        let reject_err = reject.clone();
        let onload = Closure::<dyn FnMut()>::new(move || {
            match reader_ok.result() {
                Ok(value) => {
                    let _ = resolve.call1(&JsValue::NULL, &value);
                }
                Err(e) => {
                    let _ = reject_err.call1(&JsValue::NULL, &e);
                }
            }
        });
        reader_for_cb.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = Closure::<dyn FnMut()>::new(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("read failed"));
        });
        reader_for_cb.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();
    });
    reader
        .read_as_data_url(file)
        .map_err(|e| format!("{e:?}"))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| format!("{e:?}"))?;
    value
        .as_string()
        .ok_or_else(|| "reader returned no string".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_types_classify() {
        assert_eq!(classify_mime("image/jpeg"), Some(ReceiptFileType::Image));
        assert_eq!(classify_mime("image/png"), Some(ReceiptFileType::Image));
        assert_eq!(classify_mime("image/gif"), Some(ReceiptFileType::Image));
        assert_eq!(classify_mime("image/webp"), Some(ReceiptFileType::Image));
        assert_eq!(classify_mime("application/pdf"), Some(ReceiptFileType::Pdf));
    }

    #[test]
    fn disallowed_types_are_rejected() {
        assert_eq!(classify_mime("image/svg+xml"), None);
        assert_eq!(classify_mime("application/zip"), None);
        assert_eq!(classify_mime("text/html"), None);
        assert_eq!(classify_mime(""), None);
    }

    #[test]
    fn oversized_file_is_rejected_with_its_name() {
        let err = validate_file("رسید.png", "image/png", MAX_FILE_BYTES + 1).unwrap_err();
        assert!(err.contains("رسید.png"));
        assert!(err.contains("۱۵ مگابایت"));
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert_eq!(
            validate_file("a.png", "image/png", MAX_FILE_BYTES),
            Ok(ReceiptFileType::Image)
        );
    }

    #[test]
    fn wrong_type_is_rejected_even_when_small() {
        let err = validate_file("receipt.zip", "application/zip", 10).unwrap_err();
        assert!(err.contains("receipt.zip"));
        assert!(err.contains("مجاز نیست"));
    }

    #[test]
    fn ledger_urls_leave_exactly_once() {
        let mut ledger = UrlLedger::default();
        ledger.insert("blob:a".to_string());
        ledger.insert("blob:b".to_string());
        ledger.insert("blob:c".to_string());

        // Individual removal hands the URL out once
        assert_eq!(ledger.remove("blob:b"), Some("blob:b".to_string()));
        assert_eq!(ledger.remove("blob:b"), None);

        // Drain hands out the rest, after which nothing is left
        let drained = ledger.drain();
        assert_eq!(drained, vec!["blob:a".to_string(), "blob:c".to_string()]);
        assert!(ledger.is_empty());
        assert!(ledger.drain().is_empty());
        assert_eq!(ledger.remove("blob:a"), None);
    }

    #[test]
    fn ledger_remove_unknown_url_is_noop() {
        let mut ledger = UrlLedger::default();
        ledger.insert("blob:a".to_string());
        assert_eq!(ledger.remove("blob:zzz"), None);
        assert_eq!(ledger.len(), 1);
    }
}
