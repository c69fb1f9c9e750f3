//! Payment Receipt Models

use serde::{Deserialize, Serialize};

/// File categories the backend accepts for receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptFileType {
    Image,
    Pdf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub id: u32,
    pub file_name: String,
    pub file_type: ReceiptFileType,
    #[serde(default)]
    pub file_size: u64,
    pub uploaded_at: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl PaymentReceipt {
    /// Link to open the stored file, preferring the direct download URL.
    pub fn best_url(&self) -> Option<&str> {
        self.download_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or_else(|| self.file_url.as_deref().filter(|u| !u.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_receipt() -> PaymentReceipt {
        PaymentReceipt {
            id: 11,
            file_name: "رسید-کارت.jpg".to_string(),
            file_type: ReceiptFileType::Image,
            file_size: 234_567,
            uploaded_at: "2024-06-02T08:00:00Z".to_string(),
            is_verified: false,
            file_url: None,
            download_url: None,
        }
    }

    #[test]
    fn best_url_prefers_download_link() {
        let mut r = make_receipt();
        assert_eq!(r.best_url(), None);
        r.file_url = Some("/media/receipts/11.jpg".to_string());
        assert_eq!(r.best_url(), Some("/media/receipts/11.jpg"));
        r.download_url = Some("/api/receipts/11/download".to_string());
        assert_eq!(r.best_url(), Some("/api/receipts/11/download"));
    }

    #[test]
    fn file_type_wire_names() {
        assert_eq!(serde_json::to_string(&ReceiptFileType::Pdf).unwrap(), "\"pdf\"");
        let t: ReceiptFileType = serde_json::from_str("\"image\"").unwrap();
        assert_eq!(t, ReceiptFileType::Image);
    }
}
