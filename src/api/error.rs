//! API Error Taxonomy
//!
//! Every request funnels into `ApiError`. Status codes map onto fixed
//! variants; 400 bodies are mined for a server-written message and an
//! optional per-field details object, both shown verbatim to the user.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The fetch itself failed (offline, DNS, CORS)
    #[error("network error: {0}")]
    Network(String),
    /// The request was aborted by the caller; never surfaced to the user
    #[error("request aborted")]
    Aborted,
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        /// Field name to joined messages
        details: Vec<(String, String)>,
    },
    #[error("not found")]
    NotFound,
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    /// 2xx arrived but the body did not parse as the expected type
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_gloo(err: gloo_net::Error) -> ApiError {
        let text = err.to_string();
        if text.contains("AbortError") {
            ApiError::Aborted
        } else {
            ApiError::Network(text)
        }
    }

    /// Map a non-2xx response. `body` is the raw response text.
    pub fn from_response(status: u16, body: &str) -> ApiError {
        let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
        let message = parsed.as_ref().and_then(extract_message);
        match status {
            400 => ApiError::Validation {
                message: message.unwrap_or_else(|| "اطلاعات ارسال‌شده معتبر نیست.".to_string()),
                details: parsed.as_ref().map(extract_details).unwrap_or_default(),
            },
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            413 => ApiError::PayloadTooLarge,
            _ => ApiError::Server {
                status,
                message: message.unwrap_or_default(),
            },
        }
    }

    /// Persian text for banners and toasts.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "خطا در برقراری ارتباط با سرور. اتصال اینترنت خود را بررسی کنید.".to_string()
            }
            ApiError::Aborted => String::new(),
            ApiError::Unauthorized => {
                "نشست شما منقضی شده است. لطفاً دوباره وارد شوید.".to_string()
            }
            ApiError::Forbidden => "شما دسترسی لازم برای این عملیات را ندارید.".to_string(),
            ApiError::Validation { message, details } => {
                if details.is_empty() {
                    message.clone()
                } else {
                    let mut lines = vec![message.clone()];
                    for (field, text) in details {
                        lines.push(format!("{field}: {text}"));
                    }
                    lines.join("\n")
                }
            }
            ApiError::NotFound => "موردی یافت نشد.".to_string(),
            ApiError::PayloadTooLarge => "حجم فایل ارسالی بیش از حد مجاز است.".to_string(),
            ApiError::Server { .. } => {
                "خطای سرور رخ داد. لطفاً بعداً دوباره تلاش کنید.".to_string()
            }
            ApiError::Decode(_) => "پاسخ دریافتی از سرور قابل پردازش نیست.".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }
}

/// Backends of this vintage spell the message as `message`, `detail`
/// or `error` depending on the view.
fn extract_message(value: &serde_json::Value) -> Option<String> {
    for key in ["message", "detail", "error"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

/// Flatten a `details` object of `field -> message | [messages]`.
fn extract_details(value: &serde_json::Value) -> Vec<(String, String)> {
    let Some(details) = value.get("details").and_then(|v| v.as_object()) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for (field, entry) in details {
        let text = match entry {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join("، "),
            other => other.to_string(),
        };
        if !text.is_empty() {
            out.push((field.clone(), text));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_variants() {
        assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_response(403, "{}"), ApiError::Forbidden);
        assert_eq!(ApiError::from_response(404, "not json"), ApiError::NotFound);
        assert_eq!(ApiError::from_response(413, ""), ApiError::PayloadTooLarge);
        assert!(matches!(
            ApiError::from_response(500, ""),
            ApiError::Server { status: 500, .. }
        ));
        assert!(matches!(
            ApiError::from_response(502, "<html>bad gateway</html>"),
            ApiError::Server { status: 502, .. }
        ));
    }

    #[test]
    fn validation_message_is_taken_verbatim() {
        let body = r#"{"message": "سفارش در این وضعیت قابل قیمت‌گذاری نیست"}"#;
        let err = ApiError::from_response(400, body);
        match err {
            ApiError::Validation { message, details } => {
                assert_eq!(message, "سفارش در این وضعیت قابل قیمت‌گذاری نیست");
                assert!(details.is_empty());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn detail_key_is_accepted_too() {
        let err = ApiError::from_response(400, r#"{"detail": "bad input"}"#);
        assert!(matches!(err, ApiError::Validation { ref message, .. } if message == "bad input"));
    }

    #[test]
    fn details_object_is_flattened() {
        let body = r#"{
            "message": "اطلاعات ناقص است",
            "details": {
                "postal_code": ["این فیلد الزامی است"],
                "phone": "شماره معتبر نیست"
            }
        }"#;
        let err = ApiError::from_response(400, body);
        let text = err.user_message();
        assert!(text.contains("اطلاعات ناقص است"));
        assert!(text.contains("postal_code: این فیلد الزامی است"));
        assert!(text.contains("phone: شماره معتبر نیست"));
    }

    #[test]
    fn unparseable_400_gets_generic_message() {
        let err = ApiError::from_response(400, "<html></html>");
        match err {
            ApiError::Validation { message, details } => {
                assert_eq!(message, "اطلاعات ارسال‌شده معتبر نیست.");
                assert!(details.is_empty());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn aborted_requests_produce_no_user_text() {
        assert!(ApiError::Aborted.user_message().is_empty());
        assert!(ApiError::Aborted.is_aborted());
    }
}
